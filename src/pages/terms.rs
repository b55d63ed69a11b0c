use super::{PolicyPage, PolicySection};

pub fn terms_of_service() -> PolicyPage {
    PolicyPage {
        slug: "terms".into(),
        title: "Terms of Service".into(),
        intro: "By accessing or purchasing from our store you agree to the following terms. \
                Please read them carefully."
            .into(),
        sections: vec![
            PolicySection::new(
                "user-check",
                "Accounts",
                "You are responsible for keeping your account credentials confidential and for all \
                 activity under your account.",
            )
            .list(&[
                "Provide accurate and complete registration details",
                "Notify us immediately of any unauthorized use",
                "One account per customer",
            ]),
            PolicySection::new(
                "shopping-bag",
                "Products and Pricing",
                "We make every effort to display product colors, sizes and prices accurately. \
                 Prices may change without notice, and we reserve the right to cancel orders placed \
                 at an incorrect price.",
            ),
            PolicySection::new(
                "credit-card",
                "Orders and Payment",
                "An order is confirmed only once payment has been received. We may refuse or cancel \
                 any order at our discretion, in which case any payment is refunded in full.",
            )
            .note("Cash on delivery is not available for international orders."),
            PolicySection::new(
                "rotate-ccw",
                "Returns and Exchanges",
                "Unworn items in their original packaging can be returned or exchanged within 30 days of delivery.",
            )
            .list(&[
                "Items must be unused, with tags attached",
                "Sale items are eligible for exchange only",
                "Socks and insoles cannot be returned for hygiene reasons",
            ]),
            PolicySection::new(
                "shield",
                "Intellectual Property",
                "All content on this site, including images, logos and text, belongs to the store or its \
                 licensors and may not be reused without written permission.",
            ),
            PolicySection::new(
                "slash",
                "Limitation of Liability",
                "To the extent permitted by law, the store is not liable for indirect or consequential \
                 damages arising from the use of our products or website.",
            ),
            PolicySection::new(
                "edit",
                "Changes to These Terms",
                "We may update these terms from time to time. The date at the top of this page shows \
                 when they were last revised.",
            ),
        ],
    }
}

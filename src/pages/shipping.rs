use super::{PolicyPage, PolicySection};

pub fn shipping_policy() -> PolicyPage {
    PolicyPage {
        slug: "shipping".into(),
        title: "Shipping Policy".into(),
        intro: "We want your new pair to reach you quickly and in perfect condition. \
                This page explains how and when we ship your order."
            .into(),
        sections: vec![
            PolicySection::new(
                "clock",
                "Order Processing",
                "Orders are processed within 1-2 business days after payment is confirmed. \
                 Orders placed on weekends or public holidays are processed on the next business day.",
            )
            .note("During sale events processing may take up to 4 business days."),
            PolicySection::new(
                "truck",
                "Shipping Methods and Delivery Times",
                "We offer the following shipping options within the country:",
            )
            .list(&[
                "Standard Shipping: 5-7 business days",
                "Express Shipping: 2-3 business days",
                "Same-Day Delivery: available in selected metro cities for orders placed before 12 PM",
            ]),
            PolicySection::new(
                "tag",
                "Shipping Charges",
                "Standard shipping is free on all orders above the free-shipping threshold shown at checkout. \
                 Express and same-day charges are calculated at checkout based on your address.",
            ),
            PolicySection::new(
                "map-pin",
                "Order Tracking",
                "Once your order ships you will receive an email and SMS with a tracking number. \
                 You can also follow your order from the Orders page of your account.",
            ),
            PolicySection::new(
                "globe",
                "International Shipping",
                "We currently ship to a limited set of countries. Delivery usually takes 10-15 business days.",
            )
            .note("Customs duties and import taxes are the responsibility of the recipient.")
            .list(&[
                "United States",
                "United Kingdom",
                "Canada",
                "Australia",
                "United Arab Emirates",
            ]),
            PolicySection::new(
                "alert-triangle",
                "Delays and Damaged Parcels",
                "Weather, courier disruptions or incorrect addresses can delay delivery. \
                 If your parcel arrives damaged, contact us within 48 hours with photos of the package \
                 and we will arrange a replacement or refund.",
            ),
        ],
    }
}

/// Static catalog data
///
/// The storefront and shows list are driven by fixed, statically enumerated
/// records. Prices are whole KES amounts held as exact decimals.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::assets::metadata::placeholder_image;

/// A merchandise product
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    /// Unique within the product catalog
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    /// Unit price in KES
    pub price: Decimal,
    /// Product photo (placeholder until real photos are supplied)
    pub image: String,
    /// Category tag used by the storefront filter
    pub category: &'static str,
    /// Size labels; empty when the product has no size choice.
    /// A non-empty list makes variant selection mandatory at add-to-cart.
    pub variants: Vec<&'static str>,
    pub is_new: bool,
    pub is_bestseller: bool,
}

/// An upcoming show
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Show {
    /// Unique within the shows list
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub ticket_link: &'static str,
    pub is_sold_out: bool,
    /// Base (standard admission) ticket price in KES
    pub price: Decimal,
}

/// Storefront filter categories: (tag, display name)
pub const PRODUCT_CATEGORIES: [(&str, &str); 4] = [
    ("all", "All Products"),
    ("clothing", "Clothing"),
    ("music", "Music"),
    ("accessories", "Accessories"),
];

/// Products matching a filter category ("all" passes everything)
pub fn products_in_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| category == "all" || product.category == category)
        .collect()
}

/// The default merchandise catalog
pub fn default_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Tour T-Shirt",
            description: "Official YABA world tour t-shirt featuring artwork from the latest album.",
            price: Decimal::from(3_900),
            image: placeholder_image(500, 500, "T-Shirt"),
            category: "clothing",
            variants: vec!["S", "M", "L", "XL", "XXL"],
            is_new: true,
            is_bestseller: false,
        },
        Product {
            id: 2,
            name: "Vinyl Record",
            description: "Limited edition vinyl pressing with exclusive artwork and bonus tracks.",
            price: Decimal::from(4_550),
            image: placeholder_image(500, 500, "Vinyl"),
            category: "music",
            variants: vec![],
            is_new: false,
            is_bestseller: true,
        },
        Product {
            id: 3,
            name: "Concert Poster",
            description: "High-quality print of the iconic concert poster, perfect for framing.",
            price: Decimal::from(3_250),
            image: placeholder_image(500, 500, "Poster"),
            category: "accessories",
            variants: vec![],
            is_new: false,
            is_bestseller: false,
        },
        Product {
            id: 4,
            name: "Hoodie",
            description: "Comfortable hoodie with embroidered logo, perfect for cooler evenings.",
            price: Decimal::from(6_500),
            image: placeholder_image(500, 500, "Hoodie"),
            category: "clothing",
            variants: vec!["S", "M", "L", "XL"],
            is_new: false,
            is_bestseller: false,
        },
        Product {
            id: 5,
            name: "Digital Album",
            description: "Download the latest album in high-resolution audio formats.",
            price: Decimal::from(1_300),
            image: placeholder_image(500, 500, "Digital"),
            category: "music",
            variants: vec![],
            is_new: false,
            is_bestseller: false,
        },
        Product {
            id: 6,
            name: "Tote Bag",
            description: "Eco-friendly canvas tote bag featuring unique YABA artwork.",
            price: Decimal::from(2_600),
            image: placeholder_image(500, 500, "Tote"),
            category: "accessories",
            variants: vec![],
            is_new: true,
            is_bestseller: false,
        },
        Product {
            id: 7,
            name: "Beanie",
            description: "Stylish and warm beanie with embroidered logo.",
            price: Decimal::from(3_000),
            image: placeholder_image(500, 500, "Beanie"),
            category: "clothing",
            variants: vec!["One Size"],
            is_new: false,
            is_bestseller: false,
        },
        Product {
            id: 8,
            name: "Signed Photo Print",
            description: "Exclusive signed photo print from the latest photoshoot.",
            price: Decimal::from(5_200),
            image: placeholder_image(500, 500, "Photo"),
            category: "accessories",
            variants: vec![],
            is_new: false,
            is_bestseller: true,
        },
    ]
}

/// The upcoming shows list
pub fn upcoming_shows() -> Vec<Show> {
    vec![
        Show {
            id: 1,
            title: "Summer Solstice Festival",
            date: "June 21, 2025",
            time: "8:00 PM",
            location: "Central Park Amphitheater, Nairobi",
            description: "A magical evening performance celebrating the summer solstice with special guest artists.",
            ticket_link: "#",
            is_sold_out: false,
            price: Decimal::from(7_800),
        },
        Show {
            id: 2,
            title: "Moonlight Sonata",
            date: "July 15, 2025",
            time: "9:30 PM",
            location: "Riverside Theater, Nairobi",
            description: "An intimate acoustic performance under the stars with a full orchestra accompaniment.",
            ticket_link: "#",
            is_sold_out: false,
            price: Decimal::from(6_500),
        },
        Show {
            id: 3,
            title: "Autumn Rhythms Tour",
            date: "September 5, 2025",
            time: "7:00 PM",
            location: "Grand Concert Hall, Mombasa",
            description: "The opening night of the nationwide Autumn Rhythms tour featuring new material.",
            ticket_link: "#",
            is_sold_out: true,
            price: Decimal::from(9_100),
        },
        Show {
            id: 4,
            title: "Winter Wonderland",
            date: "December 12, 2025",
            time: "6:30 PM",
            location: "Symphony Hall, Kisumu",
            description: "A festive celebration with holiday classics reimagined in a unique artistic style.",
            ticket_link: "#",
            is_sold_out: false,
            price: Decimal::from(7_150),
        },
    ]
}

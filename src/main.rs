use std::error::Error;
use std::path::Path;

// Declare the site modules
mod assets;
mod catalog;
mod order;
mod submit;

use assets::listing;
use assets::metadata::{self, MediaAsset};
use catalog::data;
use order::cart::Order;
use order::pricing;
use submit::{Enquiry, EnquiryType, PaymentMethod};

/// Image listings for the site sections, loaded once at startup
struct SiteContent {
    /// Gallery assets with derived category and caption
    gallery: Vec<MediaAsset>,
    /// Carousel assets with derived captions
    carousel: Vec<MediaAsset>,
    /// Raw show image paths, cycled across the shows list
    shows: Vec<String>,
    /// Raw merchandise image paths, cycled across the product grid
    merchandise: Vec<String>,
}

impl SiteContent {
    /// Scan every section folder under the public content root
    ///
    /// Sections whose folder is missing or empty fall back to placeholder
    /// URLs, so the site always has something to render.
    fn load(public_root: &Path) -> Self {
        let mut listings: Vec<(&str, Vec<String>)> = Vec::new();
        for folder in listing::SECTION_FOLDERS {
            let images = listing::list_images(public_root, folder);
            println!("📁 {folder}: {} images", images.len());
            listings.push((folder, images));
        }

        let take = |name: &str| -> Vec<String> {
            listings
                .iter()
                .find(|(folder, _)| *folder == name)
                .map(|(_, images)| images.clone())
                .unwrap_or_default()
        };

        let gallery = assets_or_default(take("images/gallery"), default_gallery);
        let carousel = assets_or_default(take("images/carousel"), default_carousel);

        SiteContent {
            gallery,
            carousel,
            shows: take("images/shows"),
            merchandise: take("images/merchandise"),
        }
    }
}

/// Derive assets from a listing, or fall back when the folder was empty
fn assets_or_default(paths: Vec<String>, fallback: fn() -> Vec<String>) -> Vec<MediaAsset> {
    let paths = if paths.is_empty() { fallback() } else { paths };
    paths
        .iter()
        .enumerate()
        .map(|(index, src)| MediaAsset::from_path(index + 1, src))
        .collect()
}

/// Placeholder gallery shown until real photos land in images/gallery
fn default_gallery() -> Vec<String> {
    [
        "Live Summer Festival Set",
        "Studio Recording Session",
        "Backstage Preparation",
        "Photoshoot Album Cover",
    ]
    .iter()
    .map(|text| metadata::placeholder_image(800, 600, text))
    .collect()
}

/// Placeholder carousel shown until real photos land in images/carousel
fn default_carousel() -> Vec<String> {
    ["Performance", "Studio"]
        .iter()
        .map(|text| metadata::placeholder_image(1600, 800, text))
        .collect()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    println!("🎤 YABA site core");

    let content = SiteContent::load(Path::new("public"));

    println!("\n🖼  Gallery ({} assets):", content.gallery.len());
    for asset in content.gallery.iter().take(8) {
        println!("   [{}] {} <- {}", asset.category, asset.caption, asset.src);
    }

    println!("\n🎠 Carousel captions:");
    for asset in &content.carousel {
        println!("   {}. {}", asset.id, asset.caption);
    }

    // ---------- Merchandise storefront ----------

    let products = data::default_products();
    println!("\n🛍  Storefront:");
    for (tag, name) in data::PRODUCT_CATEGORIES {
        let count = data::products_in_category(&products, tag).len();
        println!("   {name}: {count} products");
    }
    for (index, product) in products.iter().enumerate() {
        let image = listing::cycled(&content.merchandise, index).unwrap_or(&product.image);
        let badge = if product.is_new {
            " [New]"
        } else if product.is_bestseller {
            " [Bestseller]"
        } else {
            ""
        };
        println!(
            "   {}{badge} {}: {} ({image})",
            product.name,
            pricing::format_kes(product.price),
            product.description
        );
    }

    let hoodie = products
        .iter()
        .find(|p| p.id == 4)
        .ok_or("hoodie missing from catalog")?;
    let vinyl = products
        .iter()
        .find(|p| p.id == 2)
        .ok_or("vinyl missing from catalog")?;
    let poster = products
        .iter()
        .find(|p| p.id == 3)
        .ok_or("poster missing from catalog")?;

    let mut cart = Order::new();
    cart.add_product(hoodie, Some("M"), 1)?;
    cart.add_product(hoodie, Some("M"), 1)?; // merges into one line of 2
    cart.add_product(vinyl, None, 1)?;
    cart.add_product(poster, None, 1)?;
    cart.update_quantity(1, 2)?;
    cart.remove_line(2)?;

    println!("\n🛒 Cart: {} items across {} lines", cart.item_count(), cart.len());
    for (index, line) in cart.lines().iter().enumerate() {
        let image = listing::cycled(&content.merchandise, index).unwrap_or("(placeholder)");
        let variant = line.variant.as_deref().unwrap_or("-");
        println!(
            "   {} x{} [{variant}] {} {image}",
            line.name,
            line.quantity,
            pricing::format_kes(line.total())
        );
    }

    for method in pricing::shipping_methods() {
        println!(
            "   🚚 {} ({}): {}",
            method.name,
            method.estimated_delivery,
            pricing::format_kes(method.price)
        );
    }

    let totals = pricing::merchandise_totals(&cart, "standard")?;
    println!("   Subtotal  {}", pricing::format_kes(totals.subtotal));
    println!("   Shipping  {}", pricing::format_kes(totals.shipping));
    println!("   Tax       {}", pricing::format_kes(totals.tax));
    println!("   Total     {}", pricing::format_kes(totals.total));

    let payment = PaymentMethod::Mpesa {
        phone: "0712 345 678".to_string(),
    };
    let outcome = submit::submit_order(&cart, &payment).await;
    if outcome.success {
        cart.clear();
        println!("✅ {}", outcome.message);
    } else {
        eprintln!("❌ {}", outcome.message);
    }

    // ---------- Ticket checkout ----------

    let shows = data::upcoming_shows();
    let show = shows
        .iter()
        .find(|s| !s.is_sold_out)
        .ok_or("every show is sold out")?;
    let show_image = listing::cycled(&content.shows, 0)
        .map(str::to_string)
        .unwrap_or_else(|| metadata::placeholder_image(600, 400, show.title));

    println!(
        "\n🎟  {} | {} {} | {} | tickets: {} | {}",
        show.title, show.date, show.time, show.location, show.ticket_link, show_image
    );
    println!("   {}", show.description);
    for ticket in pricing::ticket_types() {
        println!(
            "   {}: {} ({})",
            ticket.name,
            pricing::format_kes(show.price * ticket.multiplier),
            ticket.description
        );
    }

    let mut tickets = Order::new();
    tickets.add_tickets(show, "vip", 2)?;
    let totals = pricing::ticket_totals(&tickets);
    println!("   Subtotal     {}", pricing::format_kes(totals.subtotal));
    println!("   Service fee  {}", pricing::format_kes(totals.service_fee));
    println!("   Total        {}", pricing::format_kes(totals.total));

    let outcome = submit::submit_order(&tickets, &PaymentMethod::Card).await;
    if outcome.success {
        tickets.clear();
        println!("✅ {}", outcome.message);
    } else {
        eprintln!("❌ {}", outcome.message);
    }

    // ---------- Enquiry form ----------

    let enquiry = Enquiry {
        name: "Amina W.".to_string(),
        email: "amina@example.com".to_string(),
        message: "Looking to book a private acoustic set in October.".to_string(),
        enquiry_type: EnquiryType::Booking,
        phone: Some("0712 345 678".to_string()),
        event_date: chrono::NaiveDate::from_ymd_opt(2025, 10, 18),
        performance_budget: Some(rust_decimal::Decimal::from(250_000)),
        songwriting_budget: None,
    };
    println!("\n✉️  Enquiry payload: {}", enquiry.to_json()?);

    let outcome = submit::submit_enquiry(&enquiry).await;
    if outcome.success {
        println!("✅ {}", outcome.message);
    } else {
        eprintln!("❌ {}", outcome.message);
    }

    Ok(())
}

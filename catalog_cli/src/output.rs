//! Human-readable output for remote records

use catalog_client_core::api::{Catalog, Operation, ReferenceImage};
use colored::*;

fn colorize(text: &str, use_color: bool, color: fn(&str) -> ColoredString) -> String {
    if use_color {
        color(text).to_string()
    } else {
        text.to_string()
    }
}

pub fn print_catalog_created(catalog: &Catalog, use_color: bool) {
    println!(
        "Catalog created: {}",
        colorize(&catalog.name, use_color, |s| s.cyan())
    );
}

pub fn print_operation(operation: &Operation, use_color: bool) {
    println!(
        "Import started: {}",
        colorize(&operation.name, use_color, |s| s.cyan())
    );
    if !operation.done {
        println!("The import job runs remotely; poll the operation to await completion.");
    }
}

pub fn print_reference_image_created(image: &ReferenceImage, use_color: bool) {
    println!(
        "Reference image created: {}",
        colorize(&image.name, use_color, |s| s.cyan())
    );
    println!(
        "Category: {}",
        colorize(&image.category.label(), use_color, |s| s.yellow())
    );
}

pub fn print_reference_image(image: &ReferenceImage, use_color: bool) {
    println!("Name: {}", colorize(&image.name, use_color, |s| s.cyan()));
    println!(
        "Category: {}",
        colorize(&image.category.label(), use_color, |s| s.yellow())
    );
    println!("Image URI: {}", image.image_uri);
    println!("Product ID: {}\n", image.product_id);
}

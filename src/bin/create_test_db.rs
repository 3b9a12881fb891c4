use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use supplier_ledger::{
    SupplierData, TransactionData, create_supplier, create_transaction, initialize_db,
};

/// A utility for creating a test database for the REST API server of the supplier ledger.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test suppliers...");

    let acme = create_supplier(
        SupplierData {
            supplier_name: "Acme".to_owned(),
            supplier_contact_person: "Bob".to_owned(),
            supplier_contact_number: "555-0100".to_owned(),
        },
        &conn,
    )?;
    let globex = create_supplier(
        SupplierData {
            supplier_name: "Globex".to_owned(),
            supplier_contact_person: "Hank".to_owned(),
            supplier_contact_number: "555-0199".to_owned(),
        },
        &conn,
    )?;

    println!("Creating test transactions...");

    let transactions = [
        ("Widget", 5, 9.99, true, "tools", acme.id),
        ("Sprocket", 12, 1.25, true, "parts", acme.id),
        ("Coffee beans", 2, 18.5, false, "kitchen", globex.id),
    ];

    for (product_name, quantity, price, vat, category, supplier_id) in transactions {
        create_transaction(
            TransactionData {
                product_name: product_name.to_owned(),
                quantity,
                price,
                vat,
                category: category.to_owned(),
                description: format!("{quantity} x {product_name}"),
                date: "2024-01-01".to_owned(),
                supplier_id,
            },
            &conn,
        )?;
    }

    println!("Success!");

    Ok(())
}

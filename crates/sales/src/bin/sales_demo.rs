//! Reserve a few products and print the resulting invoice as JSON.

use std::sync::Arc;

use ecommerce_core::{ClientData, Id, Money};
use ecommerce_invoicing::{BookKeeper, DefaultTaxPolicy, InvoiceFactory};
use ecommerce_products::{InMemoryProductRepository, Product, ProductType};
use ecommerce_sales::{
    AddProductCommand, AddProductCommandHandler, InMemoryReservationRepository,
    IssueInvoiceCommand, IssueInvoiceCommandHandler, Reservation, ReservationRepository,
};

fn main() -> anyhow::Result<()> {
    ecommerce_observability::init();

    let products = Arc::new(InMemoryProductRepository::with_products([
        Product::new(Id::new("bread"), Money::from_minor(349), "Bread", ProductType::Food)?,
        Product::new(Id::new("aspirin"), Money::from_minor(1299), "Aspirin", ProductType::Drug)?,
        Product::new(Id::new("kettle"), Money::from_units(40), "Kettle", ProductType::Standard)?,
    ]));
    let reservations = Arc::new(InMemoryReservationRepository::new());

    let order_id = Id::generate();
    let client = ClientData::try_new(Id::new("5"), "testClient1")?;
    reservations.save(&Reservation::open(order_id.clone(), client))?;

    let add_product = AddProductCommandHandler::new(reservations.clone(), products);
    for (product, quantity) in [("bread", 2), ("aspirin", 1), ("kettle", 1), ("bread", 1)] {
        add_product.handle(&AddProductCommand::new(order_id.clone(), Id::new(product), quantity))?;
    }

    let issue_invoice = IssueInvoiceCommandHandler::new(
        reservations,
        BookKeeper::new(InvoiceFactory::new()),
        Arc::new(DefaultTaxPolicy::new()),
    );
    let invoice = issue_invoice.handle(&IssueInvoiceCommand::new(order_id))?;

    let (net, gross) = (invoice.net()?, invoice.gross()?);
    tracing::info!(net = %net, gross = %gross, "demo finished");
    println!("{}", serde_json::to_string_pretty(&invoice)?);
    Ok(())
}

//! End-to-end flow through the command handlers with in-memory collaborators.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use rust_decimal::Decimal;

use ecommerce_core::{ClientData, DomainError, Id, Money, RepositoryError};
use ecommerce_invoicing::{BookKeeper, DefaultTaxPolicy, Tax, TaxError, TaxPolicy, TaxRate};
use ecommerce_products::{InMemoryProductRepository, Product, ProductRepository, ProductType};
use ecommerce_sales::{
    AddProductCommand, AddProductCommandHandler, InMemoryReservationRepository,
    IssueInvoiceCommand, IssueInvoiceCommandHandler, Reservation, ReservationRepository,
    SalesError,
};

/// Wraps the in-memory store and counts `save` calls.
#[derive(Default)]
struct CountingReservationRepository {
    inner: InMemoryReservationRepository,
    saves: AtomicUsize,
}

impl CountingReservationRepository {
    fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl ReservationRepository for CountingReservationRepository {
    fn load(&self, id: &Id) -> Result<Option<Reservation>, RepositoryError> {
        self.inner.load(id)
    }

    fn save(&self, reservation: &Reservation) -> Result<(), RepositoryError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(reservation)
    }
}

/// Thread-safe recording policy (handlers require `Send + Sync`).
struct RecordingTaxPolicy {
    calls: Mutex<Vec<(ProductType, Money)>>,
}

impl RecordingTaxPolicy {
    fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(ProductType, Money)> {
        self.calls.lock().unwrap().clone()
    }
}

impl TaxPolicy for RecordingTaxPolicy {
    fn calculate_tax(&self, product_type: ProductType, net: Money) -> Result<Tax, TaxError> {
        self.calls.lock().unwrap().push((product_type, net));
        Ok(Tax::new(Money::from_units(1), "10%"))
    }
}

fn catalog() -> Arc<InMemoryProductRepository> {
    Arc::new(InMemoryProductRepository::with_products([
        Product::new(Id::new("1"), Money::from_units(10), "Product1", ProductType::Food).unwrap(),
        Product::new(Id::new("2"), Money::from_units(20), "Product2", ProductType::Drug).unwrap(),
    ]))
}

fn opened(repo: &dyn ReservationRepository) -> Id {
    let id = Id::generate();
    let client = ClientData::new(Id::new("5"), "testClient1");
    repo.save(&Reservation::open(id.clone(), client)).unwrap();
    id
}

#[test]
fn add_product_returns_unit_and_saves_once() {
    let reservations = Arc::new(CountingReservationRepository::default());
    let order_id = opened(&reservations.inner);
    let handler = AddProductCommandHandler::new(reservations.clone(), catalog());

    let result = handler.handle(&AddProductCommand::new(order_id.clone(), Id::new("1"), 1));

    assert_eq!(result, Ok(()));
    assert_eq!(reservations.saves(), 1);
    let stored = reservations.load(&order_id).unwrap().unwrap();
    assert!(stored.contains(&Id::new("1")));
}

#[test]
fn add_product_reports_missing_reservation_and_product() {
    let reservations = Arc::new(InMemoryReservationRepository::new());
    let order_id = opened(&*reservations);
    let handler = AddProductCommandHandler::new(reservations.clone(), catalog());

    let err = handler
        .handle(&AddProductCommand::new(Id::new("nope"), Id::new("1"), 1))
        .unwrap_err();
    assert_eq!(err, SalesError::ReservationNotFound(Id::new("nope")));

    let err = handler
        .handle(&AddProductCommand::new(order_id, Id::new("42"), 1))
        .unwrap_err();
    assert_eq!(err, SalesError::ProductNotFound(Id::new("42")));
}

#[test]
fn add_product_to_closed_reservation_is_rejected_without_saving() {
    let reservations = Arc::new(CountingReservationRepository::default());
    let order_id = opened(&reservations.inner);
    let mut reservation = reservations.load(&order_id).unwrap().unwrap();
    reservation.close().unwrap();
    reservations.inner.save(&reservation).unwrap();

    let handler = AddProductCommandHandler::new(reservations.clone(), catalog());
    let err = handler
        .handle(&AddProductCommand::new(order_id, Id::new("1"), 1))
        .unwrap_err();

    assert!(matches!(err, SalesError::Domain(DomainError::InvariantViolation(_))));
    assert_eq!(reservations.saves(), 0);
}

#[test]
fn issue_invoice_closes_reservation_and_keeps_client() {
    let reservations = Arc::new(InMemoryReservationRepository::new());
    let products = catalog();
    let order_id = opened(&*reservations);

    let add = AddProductCommandHandler::new(reservations.clone(), products.clone());
    add.handle(&AddProductCommand::new(order_id.clone(), Id::new("1"), 2)).unwrap();
    add.handle(&AddProductCommand::new(order_id.clone(), Id::new("2"), 1)).unwrap();

    let policy = Arc::new(RecordingTaxPolicy::new());
    let issue = IssueInvoiceCommandHandler::new(
        reservations.clone(),
        BookKeeper::default(),
        policy.clone(),
    );
    let invoice = issue.handle(&IssueInvoiceCommand::new(order_id.clone())).unwrap();

    assert_eq!(invoice.client().id().as_str(), "5");
    assert_eq!(invoice.client().name(), "testClient1");
    assert_eq!(invoice.items().len(), 2);
    assert_eq!(
        policy.calls(),
        vec![
            (ProductType::Food, Money::from_units(20)),
            (ProductType::Drug, Money::from_units(20)),
        ]
    );
    assert!(reservations.load(&order_id).unwrap().unwrap().is_closed());
}

#[test]
fn issue_invoice_with_default_policy_totals() {
    let reservations = Arc::new(InMemoryReservationRepository::new());
    let order_id = opened(&*reservations);
    AddProductCommandHandler::new(reservations.clone(), catalog())
        .handle(&AddProductCommand::new(order_id.clone(), Id::new("1"), 1))
        .unwrap();

    let issue = IssueInvoiceCommandHandler::new(
        reservations,
        BookKeeper::default(),
        Arc::new(DefaultTaxPolicy::new()),
    );
    let invoice = issue.handle(&IssueInvoiceCommand::new(order_id)).unwrap();

    assert_eq!(invoice.net().unwrap(), Money::from_units(10));
    assert_eq!(invoice.gross().unwrap(), Money::from_minor(1070));
}

#[test]
fn tax_failure_leaves_stored_reservation_open() {
    let reservations = Arc::new(CountingReservationRepository::default());
    let order_id = opened(&reservations.inner);
    AddProductCommandHandler::new(reservations.clone(), catalog())
        .handle(&AddProductCommand::new(order_id.clone(), Id::new("2"), 1))
        .unwrap();
    assert_eq!(reservations.saves(), 1);

    let food_only = DefaultTaxPolicy::empty().with_rate(
        ProductType::Food,
        TaxRate::new(Decimal::new(10, 2), "10%"),
    );
    let issue = IssueInvoiceCommandHandler::new(
        reservations.clone(),
        BookKeeper::default(),
        Arc::new(food_only),
    );
    let err = issue.handle(&IssueInvoiceCommand::new(order_id.clone())).unwrap_err();

    assert_eq!(err, SalesError::Tax(TaxError::UnsupportedProductType(ProductType::Drug)));
    assert_eq!(reservations.saves(), 1);
    assert!(!reservations.load(&order_id).unwrap().unwrap().is_closed());
}

#[test]
fn empty_reservation_yields_empty_invoice() {
    let reservations = Arc::new(InMemoryReservationRepository::new());
    let order_id = opened(&*reservations);
    let policy = Arc::new(RecordingTaxPolicy::new());

    let invoice = IssueInvoiceCommandHandler::new(reservations, BookKeeper::default(), policy.clone())
        .handle(&IssueInvoiceCommand::new(order_id))
        .unwrap();

    assert!(invoice.items().is_empty());
    assert!(policy.calls().is_empty());
}

#[test]
fn snapshot_survives_catalog_price_change() {
    let reservations = Arc::new(InMemoryReservationRepository::new());
    let products = catalog();
    let order_id = opened(&*reservations);
    AddProductCommandHandler::new(reservations.clone(), products.clone())
        .handle(&AddProductCommand::new(order_id.clone(), Id::new("1"), 1))
        .unwrap();

    let mut product = products.load(&Id::new("1")).unwrap().unwrap();
    product.change_price(Money::from_units(999)).unwrap();
    products.save(&product).unwrap();

    let policy = Arc::new(RecordingTaxPolicy::new());
    let invoice = IssueInvoiceCommandHandler::new(reservations, BookKeeper::default(), policy)
        .handle(&IssueInvoiceCommand::new(order_id))
        .unwrap();

    assert_eq!(invoice.items()[0].item().product_data().price(), Money::from_units(10));
    assert_eq!(invoice.net().unwrap(), Money::from_units(10));
}

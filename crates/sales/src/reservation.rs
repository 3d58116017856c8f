use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ecommerce_core::{ClientData, DomainError, DomainResult, Entity, Id, Money};
use ecommerce_invoicing::{InvoiceRequest, RequestItem};
use ecommerce_products::{Product, ProductData};

/// Reservation status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Opened,
    Closed,
}

/// Reserved product: snapshot taken when first reserved, accumulated quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservedProduct {
    product_data: ProductData,
    quantity: u32,
    total_cost: Money,
}

impl ReservedProduct {
    fn new(product_data: ProductData, quantity: u32) -> DomainResult<Self> {
        let total_cost = product_data.price().times(quantity)?;
        Ok(Self {
            product_data,
            quantity,
            total_cost,
        })
    }

    fn increase_quantity_by(&mut self, quantity: u32) -> DomainResult<()> {
        let quantity = self
            .quantity
            .checked_add(quantity)
            .ok_or_else(|| DomainError::invariant("reserved quantity overflow"))?;
        self.total_cost = self.product_data.price().times(quantity)?;
        self.quantity = quantity;
        Ok(())
    }

    pub fn product_data(&self) -> &ProductData {
        &self.product_data
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total_cost(&self) -> Money {
        self.total_cost
    }
}

/// Entity: Reservation (a client's basket awaiting invoicing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: Id,
    status: ReservationStatus,
    client: ClientData,
    create_date: DateTime<Utc>,
    items: Vec<ReservedProduct>,
}

impl Reservation {
    pub fn new(
        id: Id,
        status: ReservationStatus,
        client: ClientData,
        create_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            status,
            client,
            create_date,
            items: Vec::new(),
        }
    }

    /// Open a new, empty reservation for `client`.
    pub fn open(id: Id, client: ClientData) -> Self {
        Self::new(id, ReservationStatus::Opened, client, Utc::now())
    }

    pub fn builder() -> ReservationBuilder {
        ReservationBuilder::default()
    }

    pub fn status(&self) -> ReservationStatus {
        self.status
    }

    pub fn client(&self) -> &ClientData {
        &self.client
    }

    pub fn create_date(&self) -> DateTime<Utc> {
        self.create_date
    }

    pub fn items(&self) -> &[ReservedProduct] {
        &self.items
    }

    pub fn is_closed(&self) -> bool {
        self.status == ReservationStatus::Closed
    }

    pub fn contains(&self, product_id: &Id) -> bool {
        self.items
            .iter()
            .any(|item| item.product_data.product_id() == product_id)
    }

    /// Reserve `quantity` units of `product`.
    ///
    /// A product already in the reservation grows in quantity (priced at its
    /// original snapshot); a new one is appended with a fresh snapshot.
    pub fn add(&mut self, product: &Product, quantity: u32) -> DomainResult<()> {
        if self.is_closed() {
            return Err(DomainError::invariant(
                "cannot add products to a closed reservation",
            ));
        }
        if !product.is_available() {
            return Err(DomainError::invariant(format!(
                "product {} is not available",
                product.id()
            )));
        }
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        let existing = self
            .items
            .iter()
            .position(|item| item.product_data.product_id() == product.id());
        match existing {
            Some(idx) => self.items[idx].increase_quantity_by(quantity),
            None => {
                let reserved = ReservedProduct::new(product.generate_snapshot(), quantity)?;
                self.items.push(reserved);
                Ok(())
            }
        }
    }

    pub fn close(&mut self) -> DomainResult<()> {
        if self.is_closed() {
            return Err(DomainError::conflict("reservation is already closed"));
        }
        self.status = ReservationStatus::Closed;
        Ok(())
    }

    /// One request line per reserved product, in reservation order.
    pub fn invoice_request(&self) -> DomainResult<InvoiceRequest> {
        let mut request = InvoiceRequest::new(self.client.clone());
        for item in &self.items {
            request.add(RequestItem::new(
                item.product_data.clone(),
                item.quantity,
                item.total_cost,
            )?);
        }
        Ok(request)
    }
}

impl Entity for Reservation {
    fn id(&self) -> &Id {
        &self.id
    }
}

/// Fluent builder for [`Reservation`]. Status defaults to `Opened` and the
/// create date to now; id and client are required.
#[derive(Debug, Clone, Default)]
pub struct ReservationBuilder {
    reservation_id: Option<Id>,
    status: Option<ReservationStatus>,
    client: Option<ClientData>,
    create_date: Option<DateTime<Utc>>,
}

impl ReservationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reservation_id(mut self, id: Id) -> Self {
        self.reservation_id = Some(id);
        self
    }

    pub fn status(mut self, status: ReservationStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn client(mut self, client: ClientData) -> Self {
        self.client = Some(client);
        self
    }

    pub fn create_date(mut self, date: DateTime<Utc>) -> Self {
        self.create_date = Some(date);
        self
    }

    pub fn build(self) -> DomainResult<Reservation> {
        let id = self
            .reservation_id
            .ok_or_else(|| DomainError::validation("reservation is missing reservation_id"))?;
        let client = self
            .client
            .ok_or_else(|| DomainError::validation("reservation is missing client"))?;
        Ok(Reservation::new(
            id,
            self.status.unwrap_or(ReservationStatus::Opened),
            client,
            self.create_date.unwrap_or_else(Utc::now),
        ))
    }
}

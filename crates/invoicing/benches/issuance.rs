use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::Utc;
use ecommerce_core::{ClientData, Id, Money};
use ecommerce_invoicing::{BookKeeper, DefaultTaxPolicy, InvoiceRequest, RequestItem};
use ecommerce_products::{ProductData, ProductType};

fn request_with(lines: usize) -> InvoiceRequest {
    let mut request = InvoiceRequest::new(ClientData::new(Id::new("bench"), "Bench Client"));
    let types = ProductType::ALL;
    for i in 0..lines {
        let data = ProductData::new(
            Id::generate(),
            Money::from_minor(1999),
            format!("product-{i}"),
            types[i % types.len()],
            Utc::now(),
        );
        request.add(RequestItem::priced(data, (i % 5 + 1) as u32).unwrap());
    }
    request
}

fn bench_issuance(c: &mut Criterion) {
    let book_keeper = BookKeeper::default();
    let policy = DefaultTaxPolicy::new();

    let mut group = c.benchmark_group("book_keeper_issuance");
    for lines in [1usize, 10, 100, 1_000] {
        let request = request_with(lines);
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &request, |b, request| {
            b.iter(|| {
                let invoice = book_keeper.issuance(black_box(request), &policy).unwrap();
                black_box(invoice)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_issuance);
criterion_main!(benches);

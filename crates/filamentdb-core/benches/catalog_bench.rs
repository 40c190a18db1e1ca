use criterion::{Criterion, black_box, criterion_group, criterion_main};

use filamentdb_core::{
    parse_leading_number, BambuMaterial, Catalog, EsunMaterial, FieldValue, MaterialRecord,
};

fn measure_strings(catalog: &Catalog) -> Vec<String> {
    let mut out = Vec::new();
    for m in catalog.bambu() {
        for field in BambuMaterial::fields() {
            if let FieldValue::Measure { raw, .. } = field.value(m) {
                out.push(raw);
            }
        }
    }
    for m in catalog.esun() {
        for field in EsunMaterial::fields() {
            if let FieldValue::Measure { raw, .. } = field.value(m) {
                out.push(raw);
            }
        }
    }
    out
}

fn bench_standard_catalog(c: &mut Criterion) {
    c.bench_function("catalog_standard", |b| b.iter(|| black_box(Catalog::standard())));
}

fn bench_validate(c: &mut Criterion) {
    let catalog = Catalog::standard();
    c.bench_function("catalog_validate", |b| {
        b.iter(|| black_box(catalog.validate().is_ok()))
    });
}

fn bench_parse_measures(c: &mut Criterion) {
    let catalog = Catalog::standard();
    let raw = measure_strings(&catalog);
    c.bench_function("parse_leading_number_all_measures", |b| {
        b.iter(|| {
            raw.iter()
                .filter_map(|s| parse_leading_number(black_box(s)))
                .sum::<f64>()
        })
    });
}

criterion_group!(benches, bench_standard_catalog, bench_validate, bench_parse_measures);
criterion_main!(benches);

//! End-to-end tests for report generation

use std::cmp::Ordering;

use rust_decimal_macros::dec;

use core_kernel::{Money, SortedList};
use domain_billing::{
    comparator, Chargeable, Invoice, InvoiceBook, InvoiceByCustomerName, InvoiceByTotal,
    LineKind, LineTerms, OrderingPolicy,
};
use interface_reports::{generate, views, CompanyTotals, ReportConfig};
use test_utils::{
    assert_charge_consistent, assert_sorted_by, CatalogFixtures, IdFixtures, InvoiceBuilder,
    PartyFixtures, TemporalFixtures,
};

// ============================================================================
// Report Generation Tests
// ============================================================================

mod generation_tests {
    use super::*;

    #[test]
    fn test_generate_all_reports() {
        let acme = PartyFixtures::company("Acme");
        let zenith = PartyFixtures::company("Zenith");
        let idle = PartyFixtures::company("Idle Holdings");

        let lease_terms = LineTerms::Lease {
            start: Some(TemporalFixtures::lease_start()),
            end: Some(TemporalFixtures::lease_end()),
        };
        let book = InvoiceBook::from_invoices([
            InvoiceBuilder::new()
                .with_customer(acme.clone())
                .with_bound(&CatalogFixtures::backhoe(), lease_terms)
                .build(),
            InvoiceBuilder::new()
                .with_customer(zenith.clone())
                .with_gravel(10)
                .with_contract(Money::new(dec!(2500.00)))
                .build(),
        ]);

        let report = generate(&ReportConfig::default(), &[acme, zenith, idle], &book).unwrap();

        let by_total: Vec<&str> = report.by_total.rows.iter().map(|r| r.customer_name.as_str()).collect();
        assert_eq!(by_total, vec!["Acme", "Zenith"]);
        assert_eq!(report.by_total.rows[0].total, Money::new(dec!(70537.29)));
        assert_eq!(report.by_total.rows[1].total, Money::new(dec!(3035.75)));
        assert_eq!(report.by_total.footer.total, Money::new(dec!(73573.04)));
        assert_eq!(report.by_total.footer.line_count, 3);

        let by_customer: Vec<&str> = report.by_customer.rows.iter().map(|r| r.customer_name.as_str()).collect();
        assert_eq!(by_customer, vec!["Acme", "Zenith"]);
        assert_eq!(report.by_customer.footer, report.by_total.footer);

        let companies: Vec<(&str, usize)> = report
            .companies
            .rows
            .iter()
            .map(|r| (r.name.as_str(), r.invoice_count))
            .collect();
        assert_eq!(companies, vec![("Idle Holdings", 0), ("Zenith", 1), ("Acme", 1)]);
        assert_eq!(report.companies.footer.invoice_count, 2);
        assert_eq!(report.companies.footer.total, Money::new(dec!(73573.04)));
    }

    #[test]
    fn test_invoice_details_follow_total_order() {
        let acme = PartyFixtures::company("Acme");
        let zenith = PartyFixtures::company("Zenith");
        let lease_terms = LineTerms::Lease {
            start: Some(TemporalFixtures::lease_start()),
            end: Some(TemporalFixtures::lease_end()),
        };
        let book = InvoiceBook::from_invoices([
            InvoiceBuilder::new()
                .with_customer(zenith.clone())
                .without_salesperson()
                .with_gravel(10)
                .with_contract(Money::new(dec!(2500.00)))
                .build(),
            InvoiceBuilder::new()
                .with_customer(acme.clone())
                .with_bound(&CatalogFixtures::backhoe(), lease_terms)
                .build(),
        ]);

        let report = generate(&ReportConfig::default(), &[acme, zenith], &book).unwrap();

        assert_eq!(report.details.len(), 2);
        let acme_detail = &report.details[0];
        assert_eq!(acme_detail.customer_name, "Acme");
        assert_eq!(acme_detail.salesperson.as_deref(), Some("Doe, John"));
        assert_eq!(acme_detail.lines.len(), 1);
        assert_eq!(acme_detail.lines[0].kind, LineKind::Lease);
        assert_eq!(acme_detail.total, Money::new(dec!(70537.29)));

        let zenith_detail = &report.details[1];
        assert_eq!(zenith_detail.salesperson, None);
        let kinds: Vec<LineKind> = zenith_detail.lines.iter().map(|l| l.kind).collect();
        assert_eq!(kinds, vec![LineKind::Material, LineKind::Contract]);
        assert_eq!(zenith_detail.lines[0].total, Money::new(dec!(535.75)));
        assert_eq!(zenith_detail.lines[1].total, Money::new(dec!(2500.00)));
        assert_eq!(zenith_detail.total, Money::new(dec!(3035.75)));
    }

    #[test]
    fn test_idle_companies_excluded_by_config() {
        let acme = PartyFixtures::company("Acme");
        let idle = PartyFixtures::company("Idle Holdings");
        let book = InvoiceBook::from_invoices([InvoiceBuilder::new().with_customer(acme.clone()).build()]);
        let config = ReportConfig {
            include_idle_companies: false,
            ..ReportConfig::default()
        };

        let report = generate(&config, &[acme, idle], &book).unwrap();

        assert_eq!(report.companies.rows.len(), 1);
        assert_eq!(report.companies.rows[0].name, "Acme");
        assert_eq!(report.companies.rows[0].total, Money::ZERO);
        assert_eq!(report.companies.footer.invoice_count, 1);
    }

    #[test]
    fn test_report_serializes() {
        let book = InvoiceBook::from_invoices([InvoiceBuilder::new().with_gravel(10).build()]);
        let report = generate(&ReportConfig::default(), &[], &book).unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["by_total"]["footer"]["total"], serde_json::json!("535.75"));
        assert_eq!(json["companies"]["rows"], serde_json::json!([]));
        assert_eq!(json["companies"]["footer"]["invoice_count"], serde_json::json!(0));
        assert_eq!(json["details"][0]["lines"][0]["kind"], serde_json::json!("Material"));
        assert_eq!(json["details"][0]["total"], serde_json::json!("535.75"));
    }

    #[test]
    fn test_holes_in_book_are_skipped() {
        let invoice = InvoiceBuilder::new().build();
        let line = CatalogFixtures::gravel()
            .bind(LineTerms::Material { quantity: dec!(10) })
            .unwrap();
        let mut book = InvoiceBook::new();
        book.record(invoice.clone(), vec![None, Some(line), None]);

        let report = generate(&ReportConfig::default(), &[invoice.customer.clone()], &book).unwrap();

        assert_eq!(report.by_total.rows[0].line_count, 1);
        assert_eq!(report.by_total.rows[0].total, Money::new(dec!(535.75)));
        assert_eq!(report.companies.rows[0].total, Money::new(dec!(535.75)));
        assert_eq!(report.details[0].lines.len(), 1);
    }
}

// ============================================================================
// Ordering Round-Trip Tests
// ============================================================================

mod round_trip_tests {
    use super::*;

    #[test]
    fn test_view_reproduces_presorted_order() {
        // Equal totals throughout; only the id tie-break separates them.
        let invoices: Vec<Invoice> = (0..6u8)
            .map(|rank| InvoiceBuilder::new().with_id(IdFixtures::invoice_id(rank)).with_gravel(5).build())
            .collect();
        let book = InvoiceBook::from_invoices(invoices.iter().cloned());

        let view = views::invoices_by_total(&book);

        let ids: Vec<_> = view.iter().map(|i| i.id).collect();
        let expected: Vec<_> = invoices.iter().map(|i| i.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_company_ties_break_by_id() {
        let companies = vec![
            PartyFixtures::company_ranked("Second", 2),
            PartyFixtures::company_ranked("First", 1),
            PartyFixtures::company_ranked("Third", 3),
        ];
        let totals = CompanyTotals::compute(&companies, &InvoiceBook::new(), true);

        let names: Vec<&str> = views::companies_by_total(&totals).iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_removing_from_view() {
        let invoices: Vec<Invoice> = (1..=3)
            .map(|tons| InvoiceBuilder::new().with_gravel(tons).build())
            .collect();
        let book = InvoiceBook::from_invoices(invoices.clone());
        let mut view = views::invoices_by_total(&book);

        let largest = book.invoice(&invoices[2].id).unwrap();
        assert!(view.remove(&largest));
        assert!(!view.remove(&largest));
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|i| i.id != largest.id));
    }
}

mod proptests {
    use super::*;
    use proptest::prelude::*;
    use test_utils::{company_strategy, invoice_strategy};

    fn sorted_copy<'a, P: OrderingPolicy<Invoice>>(invoices: &'a [Invoice], policy: &P) -> Vec<&'a Invoice> {
        let mut sorted: Vec<&Invoice> = invoices.iter().collect();
        sorted.sort_by(|a, b| policy.compare(a, b));
        sorted
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn view_matches_a_sorted_copy(
            invoices in prop::collection::vec(company_strategy(), 1..4)
                .prop_flat_map(|customers| prop::collection::vec(invoice_strategy(customers, 4), 0..12))
        ) {
            let book = InvoiceBook::from_invoices(invoices.iter().cloned());
            let mut unique: Vec<Invoice> = book.invoices().cloned().collect();
            unique.sort_by_key(|i| i.id);

            let policy = InvoiceByTotal::new(&book);
            let mut view = SortedList::new(comparator::<Invoice, _>(InvoiceByTotal::new(&book)));
            view.add_all(unique.iter());

            let from_view: Vec<_> = view.iter().map(|i| i.id).collect();
            let from_sort: Vec<_> = sorted_copy(&unique, &policy).iter().map(|i| i.id).collect();
            prop_assert_eq!(from_view, from_sort);
            prop_assert_eq!(view.len(), unique.len());
        }

        #[test]
        fn customer_view_is_sorted(
            invoices in prop::collection::vec(company_strategy(), 1..4)
                .prop_flat_map(|customers| prop::collection::vec(invoice_strategy(customers, 2), 0..12))
        ) {
            let book = InvoiceBook::from_invoices(invoices);
            let view = views::invoices_by_customer(&book);

            let ordered: Vec<&Invoice> = view.iter().copied().collect();
            assert_sorted_by(&ordered, |a, b| InvoiceByCustomerName.compare(a, b));
            for invoice in &ordered {
                assert_charge_consistent(*invoice);
            }
        }

        #[test]
        fn every_line_is_consistent(invoice in invoice_strategy(vec![PartyFixtures::company("Acme")], 8)) {
            for line in invoice.lines() {
                assert_charge_consistent(line);
            }
            prop_assert_eq!(invoice.total(), invoice.subtotal() + invoice.taxes());
        }
    }

    #[test]
    fn test_sorted_copy_is_descending() {
        let invoices: Vec<Invoice> = (1..=4).map(|t| InvoiceBuilder::new().with_gravel(t).build()).collect();
        let book = InvoiceBook::from_invoices(invoices.clone());
        let policy = InvoiceByTotal::new(&book);

        let sorted = sorted_copy(&invoices, &policy);
        assert_eq!(sorted[0].total().cmp(&sorted[3].total()), Ordering::Greater);
    }
}

//! Payment receipt fragment
//!
//! A key/value table of the payment record. The amount is stored in minor
//! currency units and printed divided by 100 with two decimals, defaulting
//! to zero; every other field defaults to the literal "N/A".

use courtdoc_model::{Block, FragmentKind, PageFragment, PaymentRecord, Table};

/// Format a minor-unit amount (paise) as rupees with two decimals.
pub fn format_amount_paise(paise: i64) -> String {
    format!("{:.2}", paise as f64 / 100.0)
}

/// Build the payment-receipt fragment.
pub fn payment_receipt(payment: &PaymentRecord) -> PageFragment {
    let rows = vec![
        row("Receipt No.", PaymentRecord::text_or_na(&payment.receipt_number)),
        row("Order ID", PaymentRecord::text_or_na(&payment.order_id)),
        row("Payer Name", PaymentRecord::text_or_na(&payment.payer_name)),
        row("Payment Method", PaymentRecord::text_or_na(&payment.payment_method)),
        row("Payment Date", PaymentRecord::text_or_na(&payment.payment_date)),
        row(
            "Amount (Rs.)",
            &format_amount_paise(payment.amount_paise_or_zero()),
        ),
    ];

    PageFragment::new(
        FragmentKind::PaymentReceipt,
        vec![
            Block::centered_heading(1, "PAYMENT RECEIPT"),
            Block::Table(Table {
                columns: vec![],
                rows,
            }),
        ],
    )
}

fn row(key: &str, value: &str) -> Vec<String> {
    vec![key.to_string(), value.to_string()]
}

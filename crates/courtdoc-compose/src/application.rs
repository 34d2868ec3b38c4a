//! Application body
//!
//! Static recital and prayer boilerplate interleaved with every field of the
//! case record, rendered unconditionally: a missing field shows as an empty
//! gap in its sentence, never an omitted recital. Closed by the verification
//! clause and the signature block with the filing date from the context.

use courtdoc_model::{Block, CaseRecord, FragmentKind, PageFragment};

use crate::context::ComposeContext;
use crate::template::fill;

const RECITALS: [&str; 6] = [
    "1. That the applicant, {applicant} ({gender}), born on {dob}, \
     {guardian_clause}is a resident of {address}.",
    "2. That the applicant may be reached on {phone} / {email}, and holds \
     identity number {id_number} and PAN {pan}.",
    "3. That the applicant placed a {deposit_type} of Rs. {deposit_amount} \
     at an interest rate of {interest_rate}% for a period of {duration}.",
    "4. That despite maturity of the said deposit and repeated demands, the \
     amount has not been refunded to the applicant by the accused, {accused}.",
    "5. That the complainant, {complainant}, has lodged the complaint on the \
     record of this Hon'ble Court in respect of the said deposit.",
    "6. {notes}",
];

const PRAYER: &str = "It is therefore most respectfully prayed that this \
     Hon'ble Court be pleased to direct refund of the deposit of \
     Rs. {deposit_amount} together with interest at {interest_rate}% to the \
     applicant, and pass such further orders as may be deemed fit.";

const VERIFICATION: &str = "I, {applicant}, the applicant above named, do \
     hereby verify at {place} on {verification_date} that the contents of \
     this application are true and correct to my own knowledge and belief, \
     and nothing material has been concealed therefrom.";

/// Build the application-body fragment.
pub fn application_body(case: &CaseRecord, ctx: &ComposeContext) -> PageFragment {
    let guardian = CaseRecord::text(&case.guardian_name);
    let guardian_clause = if guardian.is_empty() {
        String::new()
    } else {
        format!("ward of {}, ", guardian)
    };

    let vars = [
        ("applicant", CaseRecord::text(&case.applicant_name)),
        ("gender", CaseRecord::text(&case.gender)),
        ("dob", CaseRecord::text(&case.date_of_birth)),
        ("guardian_clause", guardian_clause.as_str()),
        ("address", CaseRecord::text(&case.address)),
        ("phone", CaseRecord::text(&case.phone)),
        ("email", CaseRecord::text(&case.email)),
        ("id_number", CaseRecord::text(&case.id_number)),
        ("pan", CaseRecord::text(&case.pan_number)),
        ("deposit_type", CaseRecord::text(&case.deposit_type)),
        ("deposit_amount", CaseRecord::text(&case.deposit_amount)),
        ("interest_rate", CaseRecord::text(&case.interest_rate)),
        ("duration", CaseRecord::text(&case.deposit_duration)),
        ("accused", CaseRecord::text(&case.accused_name)),
        ("complainant", CaseRecord::text(&case.complainant_name)),
        ("notes", CaseRecord::text(&case.notes)),
        ("place", ComposeContext::text(&ctx.verification_place)),
        ("verification_date", ComposeContext::text(&ctx.verification_date)),
        ("filing_date", ComposeContext::text(&ctx.filing_date)),
    ];

    let mut blocks = vec![Block::centered_heading(
        1,
        "APPLICATION FOR REFUND OF DEPOSIT",
    )];

    blocks.push(Block::paragraph(
        "The applicant above named most respectfully submits as under:",
    ));
    for recital in RECITALS {
        blocks.push(Block::paragraph(fill(recital, &vars)));
    }

    blocks.push(Block::centered_heading(2, "PRAYER"));
    blocks.push(Block::paragraph(fill(PRAYER, &vars)));

    blocks.push(Block::centered_heading(2, "VERIFICATION"));
    blocks.push(Block::paragraph(fill(VERIFICATION, &vars)));
    blocks.push(Block::paragraph(fill("Date: {filing_date}", &vars)));
    blocks.push(Block::bold_paragraph(fill("{applicant}", &vars)));
    blocks.push(Block::paragraph("(Applicant)"));

    PageFragment::new(FragmentKind::ApplicationBody, blocks)
}

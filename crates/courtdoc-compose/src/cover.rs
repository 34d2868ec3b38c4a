//! Cover page and index table
//!
//! The index body is two fixed rows ("Application", "List of Documents")
//! followed by one generated row per exhibit, numbered from 3. PARTICULARS
//! carries the exhibit description, EXHIBIT No. its title. Unset case fields
//! render as empty cells; rows are never omitted.

use courtdoc_model::{
    Block, CaseRecord, ExhibitDescriptor, FragmentKind, PageFragment, Table,
};

use crate::template::fill;

/// Fixed index entries preceding the exhibit rows.
const FIXED_INDEX_ROWS: [&str; 2] = ["Application", "List of Documents"];

/// Build the cover/index fragment.
pub fn cover_index(case: &CaseRecord, exhibits: &[ExhibitDescriptor]) -> PageFragment {
    let vars = [
        ("court", CaseRecord::text(&case.court_name)),
        ("case_number", CaseRecord::text(&case.case_number)),
        ("applicant", CaseRecord::text(&case.applicant_name)),
        ("accused", CaseRecord::text(&case.accused_name)),
        ("complainant", CaseRecord::text(&case.complainant_name)),
    ];

    let mut blocks = vec![
        Block::centered_heading(1, fill("IN THE COURT OF {court}", &vars)),
        Block::centered_heading(2, fill("APPLICATION NO. {case_number}", &vars)),
        Block::bold_paragraph(fill("{applicant} ... Applicant", &vars)),
        Block::paragraph("VERSUS"),
        Block::bold_paragraph(fill("{accused} ... Accused", &vars)),
        Block::paragraph(fill("Complainant: {complainant}", &vars)),
        Block::centered_heading(2, "INDEX"),
    ];

    blocks.push(Block::Table(index_table(exhibits)));
    PageFragment::new(FragmentKind::CoverIndex, blocks)
}

/// Build the index table: fixed rows first, then exhibits numbered from 3.
fn index_table(exhibits: &[ExhibitDescriptor]) -> Table {
    let mut rows: Vec<Vec<String>> = FIXED_INDEX_ROWS
        .iter()
        .enumerate()
        .map(|(i, particulars)| vec![(i + 1).to_string(), (*particulars).to_string(), String::new()])
        .collect();

    for (i, exhibit) in exhibits.iter().enumerate() {
        rows.push(vec![
            (FIXED_INDEX_ROWS.len() + i + 1).to_string(),
            exhibit.description.clone(),
            exhibit.title.clone(),
        ]);
    }

    Table {
        columns: vec![
            "SR. NO.".to_string(),
            "PARTICULARS".to_string(),
            "EXHIBIT No.".to_string(),
        ],
        rows,
    }
}

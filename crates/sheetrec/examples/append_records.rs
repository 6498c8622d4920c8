//! Builds a batch for a small record type and prints the encoded wire
//! request, then parses a fetched row back into a record.

use sheetrec::{
    BatchBuilder, CellValue, PositionedCell, RawValue, RecordError, SheetRange, SheetRecord,
    encode_batch, record,
};

#[derive(Debug)]
struct Contact {
    row: Option<u32>,
    name: String,
    age: i64,
}

impl SheetRecord for Contact {
    fn to_cells(&self, _tab: &str) -> Vec<PositionedCell> {
        vec![
            PositionedCell::new(1, self.name.as_str()),
            PositionedCell::new(2, self.age),
        ]
    }

    fn from_row(values: &[RawValue], row: u32) -> Result<Self, RecordError> {
        Ok(Self {
            row: Some(row),
            name: record::optional_string(values, 1, row),
            age: record::required_i64(values, 2, row)?,
        })
    }

    fn row(&self) -> Option<u32> {
        self.row
    }
}

fn main() {
    let contacts = [
        Contact {
            row: None,
            name: "Alice".to_string(),
            age: 30,
        },
        Contact {
            row: None,
            name: "Bob".to_string(),
            age: 41,
        },
    ];

    let batch = BatchBuilder::new("Contacts")
        .append_records(&contacts)
        .delete_row(9)
        .expect("row 9 is a valid row")
        .update_cell(
            SheetRange::cell("Contacts", 2, 2).expect("valid cell"),
            CellValue::from(31i64),
        )
        .build();

    println!("=== Batch ({} edits) ===", batch.len());
    let encoded = encode_batch(&batch, 1234).expect("encodable batch");
    println!(
        "{}",
        serde_json::to_string_pretty(&encoded).expect("serializable request")
    );

    // The read path: raw values arrive untyped and get coerced per field.
    let fetched: Vec<RawValue> = vec!["Carol".into(), "28".into()];
    let parsed = Contact::from_row(&fetched, 5).expect("well-formed row");
    println!("\n=== Parsed from row 5 ===");
    println!("{:?}", parsed);
}

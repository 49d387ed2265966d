use std::sync::Arc;

use arrow::datatypes::{Schema, SchemaRef};
use arrow::record_batch::RecordBatch;

/// Structured result of a read operation: rows by typed columns.
///
/// A thin wrapper over an Arrow [`RecordBatch`]. An empty table has zero
/// rows and, when neither a header nor data existed, zero columns.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    batch: RecordBatch,
}

impl DataTable {
    pub fn new(batch: RecordBatch) -> Self {
        Self { batch }
    }

    /// A table with no rows and no columns.
    pub fn empty() -> Self {
        Self {
            batch: RecordBatch::new_empty(Arc::new(Schema::empty())),
        }
    }

    pub fn schema(&self) -> SchemaRef {
        self.batch.schema()
    }

    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    pub fn num_columns(&self) -> usize {
        self.batch.num_columns()
    }

    pub fn is_empty(&self) -> bool {
        self.batch.num_rows() == 0
    }

    /// Column names in schema order.
    pub fn column_names(&self) -> Vec<String> {
        self.schema()
            .fields()
            .iter()
            .map(|field| field.name().clone())
            .collect()
    }

    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }

    pub fn into_batch(self) -> RecordBatch {
        self.batch
    }
}

impl From<RecordBatch> for DataTable {
    fn from(batch: RecordBatch) -> Self {
        Self::new(batch)
    }
}

#[cfg(test)]
mod tests {
    use arrow::array::Int64Array;
    use arrow::datatypes::{DataType, Field};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_table_has_no_rows_or_columns() {
        let fixture = DataTable::empty();
        let actual = (fixture.num_rows(), fixture.num_columns(), fixture.is_empty());
        let expected = (0, 0, true);
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_column_names_follow_schema_order() {
        let schema = Arc::new(Schema::new(vec![
            Field::new("a", DataType::Int64, true),
            Field::new("b", DataType::Int64, true),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Int64Array::from(vec![1, 2])),
                Arc::new(Int64Array::from(vec![3, 4])),
            ],
        )
        .unwrap();
        let fixture = DataTable::new(batch);
        let actual = fixture.column_names();
        let expected = vec!["a".to_string(), "b".to_string()];
        assert_eq!(actual, expected);
    }
}

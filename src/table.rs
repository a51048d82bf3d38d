use anyhow::{Context, Result};
use arrow::{
    array::{ArrayRef, Int64Array},
    datatypes::{DataType as ArrowDataType, Field, Schema as ArrowSchema},
    record_batch::RecordBatch,
};
use std::sync::Arc;

/// One day's passenger count.
pub struct RidershipRow {
    pub day: i64,
    pub num_passengers: i64,
}

/// The fixed sample set every pipeline run is built from.
pub fn sample_rows() -> Vec<RidershipRow> {
    vec![
        RidershipRow {
            day: 1,
            num_passengers: 3,
        },
        RidershipRow {
            day: 2,
            num_passengers: 4,
        },
    ]
}

/// Base schema: ["day":Int64, "num_passengers":Int64], both non-null.
pub fn schema() -> ArrowSchema {
    ArrowSchema::new(vec![
        Field::new("day", ArrowDataType::Int64, false),
        Field::new("num_passengers", ArrowDataType::Int64, false),
    ])
}

/// Package `rows` into a single RecordBatch under the base schema.
pub fn build_batch(rows: &[RidershipRow]) -> Result<RecordBatch> {
    let days: Vec<i64> = rows.iter().map(|r| r.day).collect();
    let passengers: Vec<i64> = rows.iter().map(|r| r.num_passengers).collect();

    RecordBatch::try_new(
        Arc::new(schema()),
        vec![
            Arc::new(Int64Array::from(days)) as ArrayRef,
            Arc::new(Int64Array::from(passengers)),
        ],
    )
    .context("building ridership RecordBatch")
}

/// Append a constant "month":Int64 column stamped onto every row of `batch`.
pub fn with_month(batch: &RecordBatch, month: i64) -> Result<RecordBatch> {
    let mut fields: Vec<Field> = batch
        .schema()
        .fields()
        .iter()
        .map(|f| f.as_ref().clone())
        .collect();
    fields.push(Field::new("month", ArrowDataType::Int64, false));

    let mut columns: Vec<ArrayRef> = batch.columns().to_vec();
    columns.push(Arc::new(Int64Array::from(vec![month; batch.num_rows()])));

    RecordBatch::try_new(Arc::new(ArrowSchema::new(fields)), columns)
        .context("appending month column")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_batch_matches_sample() {
        let batch = build_batch(&sample_rows()).unwrap();
        assert_eq!(batch.num_rows(), 2);
        assert_eq!(batch.num_columns(), 2);

        let days = batch
            .column(0)
            .as_any()
            .downcast_ref::<Int64Array>()
            .unwrap();
        let passengers = batch
            .column(1)
            .as_any()
            .downcast_ref::<Int64Array>()
            .unwrap();
        assert_eq!(days.value(0), 1);
        assert_eq!(days.value(1), 2);
        assert_eq!(passengers.value(0), 3);
        assert_eq!(passengers.value(1), 4);
    }

    #[test]
    fn test_with_month_appends_constant_column() {
        let batch = build_batch(&sample_rows()).unwrap();
        let annotated = with_month(&batch, 2).unwrap();

        assert_eq!(annotated.num_columns(), 3);
        assert_eq!(annotated.schema().field(2).name(), "month");

        let months = annotated
            .column(2)
            .as_any()
            .downcast_ref::<Int64Array>()
            .unwrap();
        assert_eq!(months.value(0), 2);
        assert_eq!(months.value(1), 2);

        // the original columns come through untouched
        let days = annotated
            .column(0)
            .as_any()
            .downcast_ref::<Int64Array>()
            .unwrap();
        assert_eq!(days.value(0), 1);
        assert_eq!(days.value(1), 2);
    }

    #[test]
    fn test_with_month_on_empty_batch() {
        let batch = build_batch(&[]).unwrap();
        let annotated = with_month(&batch, 2).unwrap();
        assert_eq!(annotated.num_rows(), 0);
        assert_eq!(annotated.num_columns(), 3);
    }
}

//! Dataset Schema Module
//! Column names of the crime dataset and dtype normalisation.

use polars::prelude::*;

pub const STATION: &str = "station";
pub const CATEGORY: &str = "category";
pub const LOCATION_X: &str = "location_x";
pub const LOCATION_Y: &str = "location_y";
pub const YEAR: &str = "year";
pub const CRIME_COUNT: &str = "crime_count";

/// Columns every crime dataset must provide.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    STATION,
    CATEGORY,
    LOCATION_X,
    LOCATION_Y,
    YEAR,
    CRIME_COUNT,
];

/// Required columns absent from `df`, in declaration order.
pub fn missing_columns(df: &DataFrame) -> Vec<&'static str> {
    REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|name| df.column(name).is_err())
        .collect()
}

/// Cast the required columns to the dtypes the aggregations expect.
///
/// Casts are non-strict, so cells that cannot be converted become null.
/// Float NaN (the CSV reader parses `NaN` text as a value) is turned into
/// null in every float column so it counts as missing everywhere.
pub fn normalize(df: DataFrame) -> LazyFrame {
    let extra_floats: Vec<Expr> = df
        .get_columns()
        .iter()
        .filter(|c| matches!(c.dtype(), DataType::Float32 | DataType::Float64))
        .filter(|c| !REQUIRED_COLUMNS.contains(&c.name().as_str()))
        .map(|c| nan_as_null(col(c.name().as_str())))
        .collect();

    let lf = df.lazy().with_columns([
        col(STATION).cast(DataType::String),
        col(CATEGORY).cast(DataType::String),
        nan_as_null(col(LOCATION_X).cast(DataType::Float64)),
        nan_as_null(col(LOCATION_Y).cast(DataType::Float64)),
        col(YEAR).cast(DataType::Int64),
        col(CRIME_COUNT).cast(DataType::Int64),
    ]);
    if extra_floats.is_empty() {
        lf
    } else {
        lf.with_columns(extra_floats)
    }
}

fn nan_as_null(expr: Expr) -> Expr {
    expr.fill_nan(lit(NULL))
}

/// Whether a column holds numbers (included in descriptive statistics).
pub fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float32
            | DataType::Float64
            | DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_reports_absent_names() {
        let df = df!(
            "station" => ["A"],
            "year" => [2020i64],
            "crime_count" => [1i64]
        )
        .unwrap();

        assert_eq!(missing_columns(&df), vec![CATEGORY, LOCATION_X, LOCATION_Y]);
    }

    #[test]
    fn test_normalize_casts_required_columns() {
        let df = df!(
            "station" => ["A", "B"],
            "category" => ["Theft", "Fraud"],
            "location_x" => [1i32, 2],
            "location_y" => ["2.5", "oops"],
            "year" => [2020.0f64, 2021.0],
            "crime_count" => [5i32, 3]
        )
        .unwrap();

        let out = normalize(df).collect().unwrap();

        assert_eq!(out.column(LOCATION_X).unwrap().dtype(), &DataType::Float64);
        assert_eq!(out.column(YEAR).unwrap().dtype(), &DataType::Int64);
        assert_eq!(out.column(CRIME_COUNT).unwrap().dtype(), &DataType::Int64);

        let lat = out.column(LOCATION_Y).unwrap().f64().unwrap();
        assert_eq!(lat.get(0), Some(2.5));
        assert_eq!(lat.get(1), None);
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric(&DataType::Int64));
        assert!(is_numeric(&DataType::Float32));
        assert!(!is_numeric(&DataType::String));
        assert!(!is_numeric(&DataType::Boolean));
    }

    #[test]
    fn test_normalize_treats_nan_as_missing() {
        let df = df!(
            "station" => ["A", "B"],
            "category" => ["Theft", "Fraud"],
            "location_x" => [f64::NAN, 2.0],
            "location_y" => [1.0f64, 2.0],
            "year" => [2020i64, 2021],
            "crime_count" => [5i64, 3],
            "severity" => [f64::NAN, 0.5]
        )
        .unwrap();

        let out = normalize(df).collect().unwrap();

        assert_eq!(out.column(LOCATION_X).unwrap().null_count(), 1);
        assert_eq!(out.column(LOCATION_Y).unwrap().null_count(), 0);
        let severity = out.column("severity").unwrap().f64().unwrap();
        assert_eq!(severity.get(0), None);
        assert_eq!(severity.get(1), Some(0.5));
    }
}

/// CSV import and export of salary series.
pub mod series_csv;

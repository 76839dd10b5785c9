use crate::core::csv_io::{parse_csv, write_csv};
use crate::core::transform::transform_record;
use crate::core::{ConfigProvider, Pipeline, SourceTable, Storage, TransformResult};
use crate::utils::error::Result;
use crate::utils::validation::validate_required_columns;

/// Reads an exported CSV, converts every test case and writes the import CSV.
pub struct ConvertPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ConvertPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ConvertPipeline<S, C> {
    async fn extract(&self) -> Result<SourceTable> {
        tracing::debug!("Reading input file: {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path()).await?;

        let table = parse_csv(&data)?;
        tracing::debug!("Input columns: {:?}", table.headers);

        validate_required_columns(&table.headers, self.config.required_columns())?;

        if table.records.is_empty() {
            tracing::warn!("⚠️ Input file has no data rows, output will only contain the header");
        }

        tracing::info!("📥 Extracted {} test cases", table.records.len());
        Ok(table)
    }

    async fn transform(&self, data: SourceTable) -> Result<TransformResult> {
        let max_steps = self.config.max_steps();
        let mut rows = Vec::with_capacity(data.records.len());

        for (index, record) in data.records.iter().enumerate() {
            tracing::info!("✅ {}", record.get("Title").unwrap_or_default());
            rows.push(transform_record(record, index + 1, max_steps)?);
        }

        let csv_output = write_csv(&rows)?;
        tracing::info!("🔄 Transformed {} test cases", rows.len());

        Ok(TransformResult { rows, csv_output })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let output_path = self.config.output_path().to_string();

        tracing::debug!(
            "Writing {} rows ({} bytes) to {}",
            result.rows.len(),
            result.csv_output.len(),
            output_path
        );
        self.storage
            .write_file(&output_path, result.csv_output.as_bytes())
            .await?;

        Ok(output_path)
    }
}

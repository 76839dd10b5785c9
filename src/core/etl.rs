use crate::core::{Pipeline, TransformResult};
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("🚀 Starting conversion");

        let result = self.preview().await?;

        let output_path = self.pipeline.load(result).await?;
        tracing::info!("💾 Conversion complete. Output written to {}", output_path);

        Ok(output_path)
    }

    /// Extract and transform without writing anything.
    pub async fn preview(&self) -> Result<TransformResult> {
        let source = self.pipeline.extract().await?;
        self.pipeline.transform(source).await
    }
}

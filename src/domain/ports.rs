use crate::utils::error::Result;
use async_trait::async_trait;

/// Byte-level storage rooted somewhere, addressed by relative path.
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Configuration surface of the icon generation job.
pub trait IconConfig: Send + Sync {
    fn output_path(&self) -> &str;
    fn sizes(&self) -> &[u32];
    fn name_prefix(&self) -> &str;
}

/// Configuration surface of the archive packaging job.
pub trait PackageConfig: Send + Sync {
    fn source_dir(&self) -> &str;
    fn output_path(&self) -> &str;
    fn archive_name(&self) -> &str;
}

/// A batch job in three stages: plan the work list, build the artifacts,
/// publish them through storage. Each stage runs once, in order.
#[async_trait]
pub trait Job: Send + Sync {
    type Item: Send;
    type Output: Send;

    fn name(&self) -> &'static str;

    async fn plan(&self) -> Result<Vec<Self::Item>>;
    async fn build(&self, items: Vec<Self::Item>) -> Result<Self::Output>;
    async fn publish(&self, output: Self::Output) -> Result<String>;
}

use crate::config::ErrorStatusPolicy;
use crate::domain::model::{InvestmentRequest, InvestmentResponse};
use crate::utils::error::Result;

/// 試算策略。HTTP 層只依賴這個 trait，方便替換計算方式。
pub trait Calculator: Send + Sync {
    fn calculate(&self, request: &InvestmentRequest) -> Result<InvestmentResponse>;
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn error_status(&self) -> ErrorStatusPolicy;

    fn bind_address(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }
}

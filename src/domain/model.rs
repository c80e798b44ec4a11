use serde::{Deserialize, Deserializer, Serialize};

/// 投資試算輸入：初始本金、每月定額、年利率 (百分比) 與年數
///
/// 缺少或為 null 的欄位一律視為 0，未知欄位會被忽略。
/// 欄位名稱另外接受首字大寫與全小寫的寫法。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvestmentRequest {
    #[serde(alias = "InitialAmount", alias = "initialamount", deserialize_with = "null_as_default")]
    pub initial_amount: f64,
    #[serde(
        alias = "MonthlyContribution",
        alias = "monthlycontribution",
        deserialize_with = "null_as_default"
    )]
    pub monthly_contribution: f64,
    #[serde(
        rename = "annualInterestRate",
        alias = "AnnualInterestRate",
        alias = "annualinterestrate",
        deserialize_with = "null_as_default"
    )]
    pub annual_interest_rate_percent: f64,
    #[serde(alias = "Years", deserialize_with = "null_as_default")]
    pub years: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// 試算結果，三個欄位皆已四捨五入至小數點後兩位
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentResponse {
    pub future_value: f64,
    pub total_contributions: f64,
    pub total_interest: f64,
}

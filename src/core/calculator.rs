use crate::domain::model::{InvestmentRequest, InvestmentResponse};
use crate::domain::ports::Calculator;
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{validate_finite, validate_non_negative, validate_positive, Validate};

const MONTHS_PER_YEAR: f64 = 12.0;

impl Validate for InvestmentRequest {
    /// 依欄位順序檢查，遇到第一個違規就回傳
    fn validate(&self) -> Result<()> {
        validate_finite("initialAmount", self.initial_amount)?;
        validate_non_negative("initialAmount", self.initial_amount)?;

        validate_finite("monthlyContribution", self.monthly_contribution)?;
        validate_positive("monthlyContribution", self.monthly_contribution)?;

        validate_finite("annualInterestRate", self.annual_interest_rate_percent)?;
        validate_non_negative("annualInterestRate", self.annual_interest_rate_percent)?;

        validate_non_negative("years", self.years)?;
        Ok(())
    }
}

/// 計算定期定額投資的終值
///
/// FV = P * (1 + r)^n + PMT * ((1 + r)^n - 1) / r，r 為月利率、n 為總月數。
/// 利率為 0 時退化為 P + PMT * n。
pub fn compute(request: &InvestmentRequest) -> Result<InvestmentResponse> {
    if let Err(e) = request.validate() {
        tracing::warn!("Rejected investment request: {}", e);
        return Err(e);
    }

    let monthly_rate = request.annual_interest_rate_percent / 100.0 / MONTHS_PER_YEAR;
    let total_months = request.years as f64 * MONTHS_PER_YEAR;

    let future_value = if monthly_rate != 0.0 {
        let growth = (1.0 + monthly_rate).powf(total_months);
        request.initial_amount * growth
            + request.monthly_contribution * (growth - 1.0) / monthly_rate
    } else {
        request.initial_amount + request.monthly_contribution * total_months
    };

    let total_contributions = request.initial_amount + request.monthly_contribution * total_months;
    let total_interest = future_value - total_contributions;

    // 極端輸入會溢位成 inf/NaN，無法以 JSON 數字表示
    for (field, value) in [
        ("futureValue", future_value),
        ("totalContributions", total_contributions),
        ("totalInterest", total_interest),
    ] {
        if !value.is_finite() {
            tracing::error!("compute overflowed: {} = {} for {:?}", field, value, request);
            return Err(PlannerError::CalculationError {
                message: format!("{} is not a finite number ({})", field, value),
            });
        }
    }

    tracing::debug!(
        "compute: capital={:.2}, deposit={:.2}, interest={:.2}%, term={}y, future_value={:.2}",
        request.initial_amount,
        request.monthly_contribution,
        request.annual_interest_rate_percent,
        request.years,
        future_value
    );

    Ok(InvestmentResponse {
        future_value: round_to_cents(future_value),
        total_contributions: round_to_cents(total_contributions),
        total_interest: round_to_cents(total_interest),
    })
}

/// 四捨五入到小數點後兩位 (half away from zero)
///
/// 以 IEEE-754 雙精度運算：0.125 -> 0.13，但 1.005 在二進位下略小於 1.005，
/// 因此得到 1.00。
pub fn round_to_cents(value: f64) -> f64 {
    // + 0.0 把 -0.0 正規化成 0.0
    (value * 100.0).round() / 100.0 + 0.0
}

/// 預設的複利計算策略
#[derive(Debug, Clone, Copy, Default)]
pub struct CompoundInterestCalculator;

impl CompoundInterestCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for CompoundInterestCalculator {
    fn calculate(&self, request: &InvestmentRequest) -> Result<InvestmentResponse> {
        compute(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    fn request(initial: f64, monthly: f64, rate: f64, years: i64) -> InvestmentRequest {
        InvestmentRequest {
            initial_amount: initial,
            monthly_contribution: monthly,
            annual_interest_rate_percent: rate,
            years,
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    fn rejected_field(result: Result<InvestmentResponse>) -> String {
        match result {
            Err(PlannerError::ValidationError { field, .. }) => field,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_reference_plan() {
        let response = assert_ok!(compute(&request(1000.0, 100.0, 5.0, 10)));

        assert_close(response.future_value, 17175.24);
        assert_close(response.total_contributions, 13000.0);
        assert_close(response.total_interest, 4175.24);
    }

    #[test]
    fn test_long_horizon_plan() {
        let response = assert_ok!(compute(&request(5000.0, 250.0, 7.0, 30)));

        assert_close(response.future_value, 345575.24);
        assert_close(response.total_contributions, 95000.0);
        assert_close(response.total_interest, 250575.24);
    }

    #[test]
    fn test_single_year_without_principal() {
        let response = assert_ok!(compute(&request(0.0, 1.0, 12.0, 1)));

        assert_close(response.future_value, 12.68);
        assert_close(response.total_contributions, 12.0);
        assert_close(response.total_interest, 0.68);
    }

    #[test]
    fn test_interest_equals_value_minus_contributions() {
        let plans = [
            request(1000.0, 100.0, 5.0, 10),
            request(0.0, 1.0, 12.0, 1),
            request(250000.0, 1500.0, 3.25, 25),
            request(12.34, 0.01, 99.0, 3),
        ];

        for plan in plans {
            let response = assert_ok!(compute(&plan));
            let diff = response.future_value - response.total_contributions;
            assert!(
                (response.total_interest - diff).abs() <= 0.01 + 1e-9,
                "interest mismatch for {:?}: {:?}",
                plan,
                response
            );
        }
    }

    #[test]
    fn test_zero_rate_is_linear() {
        let response = assert_ok!(compute(&request(1000.0, 100.0, 0.0, 10)));

        assert_eq!(response.future_value, 13000.0);
        assert_eq!(response.total_contributions, 13000.0);
        assert_eq!(response.total_interest, 0.0);
    }

    #[test]
    fn test_zero_years_returns_principal() {
        let response = assert_ok!(compute(&request(1000.0, 100.0, 5.0, 0)));

        assert_eq!(response.future_value, 1000.0);
        assert_eq!(response.total_contributions, 1000.0);
        assert_eq!(response.total_interest, 0.0);
    }

    #[test]
    fn test_zero_years_rounds_principal() {
        let response = assert_ok!(compute(&request(1234.567, 50.0, 0.0, 0)));

        assert_eq!(response.future_value, 1234.57);
        assert_eq!(response.total_contributions, 1234.57);
        assert_eq!(response.total_interest, 0.0);
    }

    #[test]
    fn test_non_positive_monthly_contribution_rejected() {
        for monthly in [0.0, -0.01, -100.0] {
            let result = compute(&request(1000.0, monthly, 5.0, 10));
            assert_eq!(rejected_field(result), "monthlyContribution");
        }
        assert_err!(compute(&request(0.0, 0.0, 0.0, 0)));
    }

    #[test]
    fn test_negative_initial_amount_rejected() {
        let result = compute(&request(-1.0, 100.0, 5.0, 10));
        assert_eq!(rejected_field(result), "initialAmount");
    }

    #[test]
    fn test_negative_rate_rejected() {
        let result = compute(&request(1000.0, 100.0, -0.5, 10));
        assert_eq!(rejected_field(result), "annualInterestRate");
    }

    #[test]
    fn test_negative_years_rejected() {
        let result = compute(&request(1000.0, 100.0, 5.0, -1));
        assert_eq!(rejected_field(result), "years");
    }

    #[test]
    fn test_first_violation_wins() {
        let result = compute(&request(-1.0, 0.0, -1.0, -1));
        assert_eq!(rejected_field(result), "initialAmount");
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        assert_eq!(
            rejected_field(compute(&request(f64::NAN, 100.0, 5.0, 10))),
            "initialAmount"
        );
        assert_eq!(
            rejected_field(compute(&request(0.0, f64::INFINITY, 5.0, 10))),
            "monthlyContribution"
        );
        assert_eq!(
            rejected_field(compute(&request(0.0, 100.0, f64::NAN, 10))),
            "annualInterestRate"
        );
    }

    #[test]
    fn test_overflow_is_calculation_error() {
        let err = assert_err!(compute(&request(0.0, 1.0, 1e6, 1000)));

        assert!(!err.is_client_error());
        match err {
            PlannerError::CalculationError { message } => {
                assert!(message.starts_with("futureValue"), "{}", message)
            }
            other => panic!("expected calculation error, got {:?}", other),
        }
    }

    #[test]
    fn test_contribution_overflow_is_calculation_error() {
        let err = assert_err!(compute(&request(f64::MAX, f64::MAX, 0.0, 1)));
        assert!(matches!(err, PlannerError::CalculationError { .. }));
    }

    #[test]
    fn test_compute_is_idempotent() {
        let plan = request(777.77, 33.33, 4.2, 17);
        let first = assert_ok!(compute(&plan));
        let second = assert_ok!(compute(&plan));
        assert_eq!(first, second);
    }

    #[test]
    fn test_round_to_cents_half_away_from_zero() {
        assert_eq!(round_to_cents(0.125), 0.13);
        assert_eq!(round_to_cents(0.375), 0.38);
        assert_eq!(round_to_cents(0.625), 0.63);
        assert_eq!(round_to_cents(1.625), 1.63);
        assert_eq!(round_to_cents(-0.125), -0.13);
        assert_eq!(round_to_cents(2.5), 2.5);
    }

    #[test]
    fn test_round_to_cents_binary_representation() {
        // 1.005 * 100 == 100.49999999999999
        assert_eq!(round_to_cents(1.005), 1.0);
        assert_eq!(round_to_cents(2.675), 2.68);
    }

    #[test]
    fn test_round_to_cents_normalizes_negative_zero() {
        let rounded = round_to_cents(-0.001);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
    }

    #[test]
    fn test_calculator_trait_delegates_to_compute() {
        let calculator = CompoundInterestCalculator::new();
        let plan = request(1000.0, 100.0, 5.0, 10);

        let via_trait = assert_ok!(calculator.calculate(&plan));
        let direct = assert_ok!(compute(&plan));
        assert_eq!(via_trait, direct);
    }
}

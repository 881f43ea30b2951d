//! 時間單位換算

use routing_core::{RoutingError, TimeUnit, UnitOfMeasure};
use rust_decimal::{Decimal, RoundingStrategy};

/// 時間單位換算器
pub struct UnitConverter;

impl UnitConverter {
    /// 工作流程工期單位換算秒數（未設定時為 0）
    pub fn duration_base_sec(duration_unit: Option<TimeUnit>) -> i64 {
        duration_unit.map_or(0, TimeUnit::base_seconds)
    }

    /// 計量單位換算秒數
    pub fn uom_base_sec(uom: &UnitOfMeasure) -> routing_core::Result<i64> {
        uom.time_unit
            .map(TimeUnit::base_seconds)
            .ok_or_else(|| RoutingError::UnsupportedUnit {
                uom: uom.to_string(),
            })
    }

    /// 檢查是否為時間單位
    pub fn is_time(uom: &UnitOfMeasure) -> bool {
        uom.is_time()
    }

    /// 將工期從工作流程工期單位換算到目標計量單位
    ///
    /// 結果的小數位數超過目標單位精度時，四捨五入到該精度。
    pub fn convert_duration(
        duration: Decimal,
        from_duration_unit: Option<TimeUnit>,
        to_uom: &UnitOfMeasure,
    ) -> routing_core::Result<Decimal> {
        let from_mult = Self::duration_base_sec(from_duration_unit);
        let to_div = Self::uom_base_sec(to_uom)?;
        if to_div <= 0 {
            return Err(RoutingError::InvalidDivisor {
                divisor: "unit base seconds",
                value: to_div.to_string(),
            });
        }

        let converted = duration
            .checked_mul(Decimal::from(from_mult))
            .ok_or_else(|| RoutingError::CalculationError(format!("工期 {duration} 換算數值溢位")))?
            / Decimal::from(to_div);
        Ok(Self::round_to_precision(converted, to_uom.std_precision))
    }

    /// 小數位數超過精度時四捨五入，否則保持原值
    pub fn round_to_precision(value: Decimal, precision: u32) -> Decimal {
        if value.scale() > precision {
            value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero)
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn time_uom(unit: TimeUnit, precision: u32) -> UnitOfMeasure {
        UnitOfMeasure::time(format!("UOM-{}", unit), unit, precision)
    }

    #[rstest]
    #[case(Some(TimeUnit::Second), 1)]
    #[case(Some(TimeUnit::Minute), 60)]
    #[case(Some(TimeUnit::Hour), 3_600)]
    #[case(Some(TimeUnit::Day), 86_400)]
    #[case(Some(TimeUnit::Month), 2_592_000)]
    #[case(Some(TimeUnit::Year), 31_536_000)]
    #[case(None, 0)]
    fn test_duration_base_sec(#[case] unit: Option<TimeUnit>, #[case] expected: i64) {
        assert_eq!(UnitConverter::duration_base_sec(unit), expected);
    }

    #[test]
    fn test_uom_base_sec() {
        assert_eq!(
            UnitConverter::uom_base_sec(&time_uom(TimeUnit::Week, 0)).unwrap(),
            604_800
        );
        assert_eq!(
            UnitConverter::uom_base_sec(&time_uom(TimeUnit::WorkDay, 0)).unwrap(),
            86_400
        );
    }

    #[test]
    fn test_uom_base_sec_rejects_non_time() {
        let each = UnitOfMeasure::new("UOM-EA".to_string(), "Each".to_string(), 0);

        let err = UnitConverter::uom_base_sec(&each).unwrap_err();
        match err {
            RoutingError::UnsupportedUnit { uom } => assert!(uom.contains("Each")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!UnitConverter::is_time(&each));
    }

    #[test]
    fn test_convert_year_to_seconds() {
        let seconds = time_uom(TimeUnit::Second, 0);
        let result =
            UnitConverter::convert_duration(Decimal::ONE, Some(TimeUnit::Year), &seconds).unwrap();

        assert_eq!(result, Decimal::from(31_536_000));
    }

    #[test]
    fn test_convert_hours_to_flat_month() {
        // 月以 30 天計：720 小時 = 1 月
        let month = time_uom(TimeUnit::Month, 2);
        let result =
            UnitConverter::convert_duration(Decimal::from(720), Some(TimeUnit::Hour), &month)
                .unwrap();
        assert_eq!(result, Decimal::ONE);

        let work_month = time_uom(TimeUnit::WorkMonth, 2);
        assert_eq!(UnitConverter::uom_base_sec(&work_month).unwrap(), 2_592_000);

        // 年以 365 天計
        let year = time_uom(TimeUnit::Year, 0);
        let result =
            UnitConverter::convert_duration(Decimal::from(365), Some(TimeUnit::Day), &year)
                .unwrap();
        assert_eq!(result, Decimal::ONE);
    }

    #[test]
    fn test_convert_overflow_is_reported() {
        let seconds = time_uom(TimeUnit::Second, 0);
        let err = UnitConverter::convert_duration(Decimal::MAX, Some(TimeUnit::Year), &seconds)
            .unwrap_err();

        assert!(matches!(err, RoutingError::CalculationError(_)));
    }

    #[test]
    fn test_convert_minutes_to_hours_rounds_half_up() {
        // 100 分 = 1.6666... 時 → 1.67
        let hours = time_uom(TimeUnit::Hour, 2);
        let result =
            UnitConverter::convert_duration(Decimal::from(100), Some(TimeUnit::Minute), &hours)
                .unwrap();

        assert_eq!(result, Decimal::new(167, 2));
        assert_eq!(result.scale(), 2);
    }

    #[test]
    fn test_convert_keeps_short_scale() {
        // 90 分 = 1.5 時，位數未超過精度不補零
        let hours = time_uom(TimeUnit::Hour, 4);
        let result =
            UnitConverter::convert_duration(Decimal::from(90), Some(TimeUnit::Minute), &hours)
                .unwrap();

        assert_eq!(result, Decimal::new(15, 1));
        assert!(result.scale() <= 4);
    }

    #[test]
    fn test_convert_from_unset_unit_is_zero() {
        let hours = time_uom(TimeUnit::Hour, 2);
        let result = UnitConverter::convert_duration(Decimal::from(5), None, &hours).unwrap();

        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn test_convert_is_idempotent_in_target_unit() {
        let hours = time_uom(TimeUnit::Hour, 2);
        let once =
            UnitConverter::convert_duration(Decimal::from(100), Some(TimeUnit::Minute), &hours)
                .unwrap();
        let twice = UnitConverter::convert_duration(once, Some(TimeUnit::Hour), &hours).unwrap();

        assert_eq!(once, twice);
    }

    #[rstest]
    #[case(Decimal::new(31500, 3), 2, Decimal::new(3150, 2))]
    #[case(Decimal::new(12345, 3), 2, Decimal::new(1235, 2))]
    #[case(Decimal::new(12344, 3), 2, Decimal::new(1234, 2))]
    #[case(Decimal::new(-12345, 3), 2, Decimal::new(-1235, 2))]
    #[case(Decimal::new(15, 1), 2, Decimal::new(15, 1))]
    #[case(Decimal::new(25, 1), 0, Decimal::from(3))]
    fn test_round_to_precision(
        #[case] value: Decimal,
        #[case] precision: u32,
        #[case] expected: Decimal,
    ) {
        let rounded = UnitConverter::round_to_precision(value, precision);
        assert_eq!(rounded, expected);
        assert!(rounded.scale() <= precision);
    }
}

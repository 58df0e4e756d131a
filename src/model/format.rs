// Beam UI: view models binding Beam wallet state to desktop UI.
//
// Written in 2022 by
//     Dr. Maxim Orlovsky <orlovsky@pandoraprime.ch>
//
// Copyright (C) 2022 by Pandora Prime Sarl, Switzerland.
//
// This software is distributed without any warranty. You should have received
// a copy of the AGPL-3.0 License along with this software. If not, see
// <https://www.gnu.org/licenses/agpl-3.0-standalone.html>.

use chrono::{FixedOffset, TimeZone};

use super::{Amount, Currency, COIN, PRECISION};

/// Short date format used for the transaction creation time column.
pub const TIME_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Renders an amount given in the smallest units as a decimal coin value,
/// dropping trailing fractional zeros. Non-empty `unit` is appended after a
/// space.
pub fn amount_to_ui_string(amount: Amount, unit: &str) -> String {
    let int = amount / COIN;
    let fract = amount % COIN;
    let mut s = if fract == 0 {
        format!("{}", int)
    } else {
        let f = format!("{:01$}", fract, PRECISION);
        format!("{}.{}", int, f.trim_end_matches('0'))
    };
    if !unit.is_empty() {
        s.push(' ');
        s.push_str(unit);
    }
    s
}

/// Amount in whole coins, as the UI properties expose balances.
pub fn amount_to_coins(amount: Amount) -> f64 { amount as f64 / COIN as f64 }

pub fn currency_unit_name(currency: Currency) -> &'static str {
    match currency {
        Currency::Beam => "BEAM",
        Currency::Bitcoin => "BTC",
        Currency::Litecoin => "LTC",
        Currency::Qtum => "QTUM",
        Currency::Usd => "USD",
        Currency::Unknown => "",
    }
}

pub fn format_time(timestamp: u64, offset: FixedOffset) -> String {
    match offset.timestamp_opt(timestamp as i64, 0).single() {
        Some(dt) => dt.format(TIME_FORMAT).to_string(),
        None => none!(),
    }
}

/// Ratio `numerator / denominator` rendered the same way as amounts.
pub fn ratio_to_ui_string(numerator: Amount, denominator: Amount) -> String {
    if denominator == 0 {
        return s!("0");
    }
    let scaled = (numerator as u128 * COIN as u128) / denominator as u128;
    amount_to_ui_string(scaled.min(Amount::MAX as u128) as Amount, "")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn amounts() {
        assert_eq!(amount_to_ui_string(0, ""), "0");
        assert_eq!(amount_to_ui_string(150_000_000, ""), "1.5");
        assert_eq!(amount_to_ui_string(1, ""), "0.00000001");
        assert_eq!(amount_to_ui_string(100_000_000, "BEAM"), "1 BEAM");
        assert_eq!(amount_to_ui_string(1_234_500_000_000, "USD"), "12345 USD");
        assert_eq!(amount_to_ui_string(10_010_000, "BTC"), "0.1001 BTC");
    }

    #[test]
    fn coins() {
        assert_eq!(amount_to_coins(250_000_000), 2.5);
    }

    #[test]
    fn unit_names() {
        assert_eq!(currency_unit_name(Currency::Usd), "USD");
        assert_eq!(currency_unit_name(Currency::Unknown), "");
    }

    #[test]
    fn time() {
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(format_time(0, utc), "01.01.1970 00:00");
        let cet = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(format_time(1_600_000_000, cet), "13.09.2020 13:26");
    }

    #[test]
    fn ratios() {
        assert_eq!(ratio_to_ui_string(50_000, 100_000_000), "0.0005");
        assert_eq!(ratio_to_ui_string(1, 0), "0");
    }
}

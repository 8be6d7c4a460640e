//! Profile - ログイン中のドライバーのプロフィール
//!
//! 認証やドライバーごとの切り替えはないので、1 人分の静的データです。

use serde::Serialize;

/// DriverProfile はプロフィール画面に出す情報
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverProfile {
    /// ロスター上の ID
    pub driver_id: &'static str,
    pub name: &'static str,
    pub employee_id: &'static str,
    pub license_class: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub home_base: &'static str,
    pub years_experience: u32,
    pub total_deliveries: u32,
    /// 定時到着率（%）
    pub on_time_rate: f64,
    pub safety_rating: &'static str,
}

pub static DRIVER_PROFILE: DriverProfile = DriverProfile {
    driver_id: "driver1",
    name: "Mike Johnson",
    employee_id: "DRV001",
    license_class: "AZ",
    phone: "(613) 555-0123",
    email: "mike.johnson@trucking.com",
    home_base: "Gananoque, ON",
    years_experience: 8,
    total_deliveries: 1247,
    on_time_rate: 98.5,
    safety_rating: "Excellent",
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::find_driver;

    #[test]
    fn profile_driver_is_on_the_roster() {
        let driver = find_driver(DRIVER_PROFILE.driver_id).unwrap();
        assert_eq!(driver.name, DRIVER_PROFILE.name);
    }

    #[test]
    fn serializes_camel_case() {
        let value = serde_json::to_value(DRIVER_PROFILE).unwrap();
        assert_eq!(value["employeeId"], "DRV001");
        assert_eq!(value["onTimeRate"], 98.5);
    }
}

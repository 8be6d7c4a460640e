//! Roster - 静的な参照データ（ドライバー一覧と州・県コード）

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Driver {
    pub id: &'static str,
    pub name: &'static str,
}

pub static DRIVER_ROSTER: [Driver; 6] = [
    Driver { id: "driver1", name: "Mike Johnson" },
    Driver { id: "driver2", name: "Sarah Chen" },
    Driver { id: "driver3", name: "Tom Wilson" },
    Driver { id: "driver4", name: "Lisa Rodriguez" },
    Driver { id: "driver5", name: "David Kim" },
    Driver { id: "driver6", name: "Emma Thompson" },
];

/// 配達エリアの州・県コード（オンタリオ東部とニューヨーク州北部）
pub static PROVINCES: [&str; 6] = ["ON", "QC", "NY", "VT", "NH", "ME"];

pub const DEFAULT_PROVINCE: &str = "ON";

pub fn find_driver(id: &str) -> Option<&'static Driver> {
    DRIVER_ROSTER.iter().find(|driver| driver.id == id)
}

/// 一覧にあるコードか（大文字小文字は区別する）
pub fn is_known_province(code: &str) -> bool {
    PROVINCES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_ids_are_unique() {
        let mut ids: Vec<_> = DRIVER_ROSTER.iter().map(|d| d.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), DRIVER_ROSTER.len());
    }

    #[test]
    fn find_driver_by_id() {
        assert_eq!(find_driver("driver3").map(|d| d.name), Some("Tom Wilson"));
        assert_eq!(find_driver("driver99"), None);
    }

    #[test]
    fn default_province_is_listed() {
        assert!(is_known_province(DEFAULT_PROVINCE));
        assert!(!is_known_province("on"));
    }
}

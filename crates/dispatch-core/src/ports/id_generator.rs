//! IdGenerator port - ID 生成の抽象化
//!
//! ストアは既存 ID の最大値から次の ID を求めたりせず、この port から受け取ります。
//! テスト容易性のために trait として抽象化しています。

use crate::domain::ids::DeliveryId;
use crate::ports::Clock;
use ulid::Ulid;

/// IdGenerator は衝突しない Delivery ID を生成
pub trait IdGenerator: Send + Sync {
    fn generate_delivery_id(&self) -> DeliveryId;
}

/// UlidGenerator は ULID ベースの ID 生成器
///
/// timestamp 部分は Clock から取るので、FixedClock を使えば時刻部分が決定的になります。
/// 残り 80 bit はランダムです。
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock + Send + Sync> IdGenerator for UlidGenerator<C> {
    fn generate_delivery_id(&self) -> DeliveryId {
        let timestamp_ms = self.clock.now().timestamp_millis().max(0) as u64;
        let ulid = Ulid::from_parts(timestamp_ms, rand::random());
        DeliveryId::from(ulid)
    }
}

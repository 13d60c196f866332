//! カタログからの一様ランダム抽選
//!
//! 毎回独立に抽選する。直前の結果や他スロットの結果を除外しないため、
//! 同じ病害が連続して、あるいは両スロットに同時に選ばれることがある。

use crate::catalog::DiseaseRecord;
use rand::Rng;

/// カタログから1件を一様ランダムに選ぶ
///
/// カタログは非空が前提（起動時検証済み）。
pub fn pick(records: &'static [DiseaseRecord]) -> &'static DiseaseRecord {
    pick_with(&mut rand::thread_rng(), records)
}

/// RNGを外から与える版（テストでシード固定するため）
pub fn pick_with<'a, R: Rng>(rng: &mut R, records: &'a [DiseaseRecord]) -> &'a DiseaseRecord {
    &records[rng.gen_range(0..records.len())]
}

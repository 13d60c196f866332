//! アップロードスロットの状態モデル
//!
//! 2つの対称なスロット(A/B)がそれぞれ「画像(data URL)」と「割り当て
//! られた病害」を保持する。アップロード完了時に両フィールドが同時に
//! セットされ、リセットで両スロットが同時に空になる。画像だけ・病害
//! だけの中間状態は外部から観測されない。

use crate::catalog::DiseaseRecord;

/// スロット識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotId {
    A,
    B,
}

impl SlotId {
    /// DOM id等に使う小文字ラベル
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotId::A => "a",
            SlotId::B => "b",
        }
    }
}

/// 1スロット分の状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotState {
    /// 表示用のdata URL。再アップロードで丸ごと置き換わる
    pub image: Option<String>,
    /// カタログ内レコードへの参照。アップロードごとに再抽選される
    pub disease: Option<&'static DiseaseRecord>,
}

impl SlotState {
    pub fn is_empty(&self) -> bool {
        self.image.is_none() && self.disease.is_none()
    }
}

/// 両スロットをまとめた比較状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompareState {
    slot_a: SlotState,
    slot_b: SlotState,
}

impl CompareState {
    pub fn slot(&self, id: SlotId) -> &SlotState {
        match id {
            SlotId::A => &self.slot_a,
            SlotId::B => &self.slot_b,
        }
    }

    fn slot_mut(&mut self, id: SlotId) -> &mut SlotState {
        match id {
            SlotId::A => &mut self.slot_a,
            SlotId::B => &mut self.slot_b,
        }
    }

    /// アップロード完了: 対象スロットの画像と病害を1遷移でセットする
    ///
    /// もう一方のスロットには触れない。ファイル読み込み完了時にのみ
    /// 呼ばれるため、読み込み中のスロットは直前の状態を保ち続ける。
    pub fn complete_upload(
        &mut self,
        id: SlotId,
        data_url: String,
        disease: &'static DiseaseRecord,
    ) {
        let slot = self.slot_mut(id);
        slot.image = Some(data_url);
        slot.disease = Some(disease);
    }

    /// リセット: 両スロットを無条件で空にする（冪等）
    pub fn reset(&mut self) {
        self.slot_a = SlotState::default();
        self.slot_b = SlotState::default();
    }

    pub fn is_empty(&self) -> bool {
        self.slot_a.is_empty() && self.slot_b.is_empty()
    }
}

use crate::constants::{INITIAL_QUALITY, QUALITY_FLOOR};
use crate::errors::TransformError;
use crate::transform::{ByteBudget, encode_jpeg};
use image::RgbImage;

/// 1回分のエンコード試行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityAttempt {
    pub quality: u8,
    pub size: usize,
}

/// 品質探索の結果
#[derive(Debug, Clone)]
pub struct QualitySearch {
    /// 採用したエンコード結果
    pub bytes: Vec<u8>,
    /// 採用した品質
    pub quality: u8,
    /// 予算内に収まったか（false の場合は最後の試行を採用している）
    pub met_budget: bool,
    /// 試行順の履歴
    pub attempts: Vec<QualityAttempt>,
}

/// 予算超過の度合いに応じて次の品質を決める
///
/// 2倍超なら15、1.3倍超なら10、それ以外は5下げる
pub fn next_quality(quality: u8, size: usize, budget: ByteBudget) -> u8 {
    let step = if budget.exceeded_by(size, 2.0) {
        15
    } else if budget.exceeded_by(size, 1.3) {
        10
    } else {
        5
    };

    quality.saturating_sub(step)
}

/// 予算に収まる品質を上から順に探す
///
/// 品質85から始め、予算内に収まった時点で採用する。下限(5)に達しても
/// 収まらない場合は最後の試行結果を `met_budget = false` で返す。
/// `encode` は品質を受け取りエンコード結果を返す。
pub fn search_quality<F, E>(budget: ByteBudget, mut encode: F) -> Result<QualitySearch, E>
where
    F: FnMut(u8) -> Result<Vec<u8>, E>,
{
    let mut quality = INITIAL_QUALITY;
    let mut attempts = Vec::new();

    // 最後の試行結果を手元に残したまま次の品質を決める
    loop {
        let bytes = encode(quality)?;
        let size = bytes.len();
        attempts.push(QualityAttempt { quality, size });

        let met_budget = budget.fits(size);
        let next = next_quality(quality, size, budget);
        if met_budget || next <= QUALITY_FLOOR {
            return Ok(QualitySearch {
                bytes,
                quality,
                met_budget,
                attempts,
            });
        }

        quality = next;
    }
}

/// JPEG エンコーダで品質探索を行う
pub fn compress_to_budget(
    img: &RgbImage,
    budget: ByteBudget,
) -> Result<QualitySearch, TransformError> {
    search_quality(budget, |quality| encode_jpeg(img, quality))
}

/// 整数同士の四捨五入除算
fn div_round(numerator: u64, denominator: u64) -> u64 {
    (2 * numerator + denominator) / (2 * denominator)
}

/// 制約となる辺を基準に、もう一方の辺を比率どおりに算出する
fn scale_other_side(other_src: u32, limiting_src: u32, limiting_bound: u32) -> u32 {
    let scaled = div_round(
        u64::from(other_src) * u64::from(limiting_bound),
        u64::from(limiting_src),
    );

    // 最小1pxを保証
    scaled.max(1) as u32
}

/// バウンディングボックスに収まる寸法を計算する（拡大はしない）
///
/// どちらかの辺がボックスを超える場合のみ縮小する。縮小時は
/// 制約となる辺がちょうど上限値になり、もう一方は比率を維持して丸める。
pub fn fit_dimensions(src_w: u32, src_h: u32, max_w: u32, max_h: u32) -> (u32, u32) {
    if src_w <= max_w && src_h <= max_h {
        return (src_w, src_h);
    }

    // src_w / src_h >= max_w / max_h なら幅が制約になる
    let width_limited = u64::from(src_w) * u64::from(max_h) >= u64::from(src_h) * u64::from(max_w);

    if width_limited {
        (max_w, scale_other_side(src_h, src_w, max_w))
    } else {
        (scale_other_side(src_w, src_h, max_h), max_h)
    }
}

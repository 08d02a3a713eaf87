//! Score display: the score is how many digits of pi the player "earned"

/// First 600 decimals of pi
pub const PI_DECIMALS: &str = "\
141592653589793238462643383279502884197169399375105820974944592307816406286208998628034825342117067982148086513282306647093844609550582231725359408128481117450284102701938521105559644622948954930381964428810975665933446128475648233786783165271201909145648566923460348610454326648213393607260249141273724587006606315588174881520920962829254091715364367892590360011330530548820466521384146951941511609433057270365759591953092186117381932611793105118548074462379962749567351885752724891227938183011949129833673362440656643086021394946395224737190702179860943702770539217176293176752384674818467669405132";

/// `3.` followed by `score` decimals, capped at the digits we carry
pub fn score_text(score: u32) -> String {
    let digits = (score as usize).min(PI_DECIMALS.len());
    format!("3.{}", &PI_DECIMALS[..digits])
}

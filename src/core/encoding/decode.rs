use base64::{Engine as _, engine::general_purpose};
use zeroize::Zeroizing;

use crate::{
    core::encoding::scratch::ScratchBuffer,
    domain::encoded::Field,
    error::{AppError, ErrBase64, ErrInput},
};

/// Decode standard base64 into exactly `N` bytes.
///
/// No trimming, no truncation, no padding repair: anything the standard
/// engine refuses, or any decoded length other than `N`, is an error. The
/// intermediate heap copy is zeroed before it is freed.
pub fn decode_fixed<const N: usize>(
    encoded: &str,
    field: Field,
) -> Result<ScratchBuffer<N>, AppError> {
    if encoded.trim().is_empty() {
        return Err(AppError::Input(ErrInput::Blank(field)));
    }

    let decoded = Zeroizing::new(
        general_purpose::STANDARD
            .decode(encoded)
            .map_err(|source| AppError::Base64(ErrBase64::Decode { field, source }))?,
    );

    let mut scratch = ScratchBuffer::<N>::new();
    scratch.fill(field, &decoded)?;
    Ok(scratch)
}

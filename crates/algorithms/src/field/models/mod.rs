//! Tower models: configurations that stack the generic extensions into
//! the concrete towers used by pairing curves.

pub mod fp12_2over3over2;
pub mod fp2;
pub mod fp3;
pub mod fp4;
pub mod fp6_2over3;
pub mod fp6_3over2;

pub use fp12_2over3over2::{Fp12, Fp12Config, Fp12ConfigWrapper};
pub use fp2::{Fp2, Fp2Config, Fp2ConfigWrapper};
pub use fp3::{Fp3, Fp3Config, Fp3ConfigWrapper};
pub use fp4::{Fp4, Fp4Config, Fp4ConfigWrapper};
pub use fp6_2over3::{Fp6Over3, Fp6Over3Config, Fp6Over3ConfigWrapper};
pub use fp6_3over2::{Fp6, Fp6Config, Fp6ConfigWrapper};

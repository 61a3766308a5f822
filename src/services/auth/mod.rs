pub mod factory;
pub mod gate;
pub mod principal;
pub mod refresh;
pub mod token_codec;

pub use factory::{access_codec, build_gate, build_refresh_exchange, refresh_codec};
pub use gate::{AuthGate, GateOutcome, RejectKind};
pub use principal::{Principal, PrincipalResolver, UserLookup};
pub use refresh::{IssuedAccessToken, RefreshExchange};
pub use token_codec::{TokenCodec, TokenError, TokenKind};

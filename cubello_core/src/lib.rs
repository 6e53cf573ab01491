//! 4×4×4 の立体リバーシのルールエンジン。
//!
//! 盤面・合法手・反転・手番（強制パスを含む）・終局判定を `engine` が提供します。
//! 描画や入力は呼び出し側（`cubello_cli` など）の責務です。
//!
//! エンジンは単一スレッドでの逐次呼び出しを前提とし、内部で排他制御は行いません。

#![forbid(unsafe_code)]

/// ゲームルール・盤面・進行を提供するモジュール。
pub mod engine;

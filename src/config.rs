/// Id of the `<style>` element holding the default rules.
pub(crate) const STYLE_ID: &str = "nifty-toast-styles";
/// Prefix shared by every generated class name.
pub(crate) const CLASS_PREFIX: &str = "nifty-toast";
/// Attribute carrying the toast identifier on its root element.
pub(crate) const ID_ATTRIBUTE: &str = "data-toast-id";
/// Class applied while a toast is entering or leaving.
pub(crate) const HIDE_CLASS: &str = "nifty-toast--hide";

pub(crate) const DEFAULT_DURATION: u32 = 4_000;
/// Matches the exit transition in `STYLESHEET`.
pub(crate) const REMOVE_DELAY: u32 = 220;

pub(crate) const STYLESHEET: &str = r#"
.nifty-toast-container {
  position: fixed;
  z-index: 9999;
  display: flex;
  flex-direction: column;
  gap: 8px;
  max-width: calc(100vw - 32px);
  pointer-events: none;
}
.nifty-toast-container--top-left { top: 16px; left: 16px; }
.nifty-toast-container--top-center { top: 16px; left: 50%; transform: translateX(-50%); }
.nifty-toast-container--top-right { top: 16px; right: 16px; }
.nifty-toast-container--bottom-left { bottom: 16px; left: 16px; flex-direction: column-reverse; }
.nifty-toast-container--bottom-center { bottom: 16px; left: 50%; transform: translateX(-50%); flex-direction: column-reverse; }
.nifty-toast-container--bottom-right { bottom: 16px; right: 16px; flex-direction: column-reverse; }
.nifty-toast {
  display: flex;
  align-items: flex-start;
  gap: 12px;
  min-width: 240px;
  max-width: 360px;
  padding: 12px 14px;
  border-radius: 6px;
  background: #363636;
  color: #fff;
  font: 14px/1.4 system-ui, sans-serif;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.2);
  pointer-events: auto;
  opacity: 1;
  transform: translateY(0);
  transition: opacity 200ms ease, transform 200ms ease;
}
.nifty-toast--hide { opacity: 0; transform: translateY(-8px); }
.nifty-toast--info { background: #3e8ed0; }
.nifty-toast--success { background: #48c78e; }
.nifty-toast--error { background: #f14668; }
.nifty-toast--warning { background: #ffe08a; color: rgba(0, 0, 0, 0.7); }
.nifty-toast__content { flex: 1; }
.nifty-toast__title { font-weight: 600; }
.nifty-toast__close {
  border: 0;
  background: transparent;
  color: inherit;
  font-size: 18px;
  line-height: 1;
  cursor: pointer;
}
"#;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Status Messages", inline)]
#[serde(default)]
/// Texts shown on the host's status line.
pub struct StatusOptions {
    /// Shown when the entry transition starts.
    pub entered: String,
    /// Shown on every tick with a movement key held.
    pub moving: String,
    /// Shown when the surface is clicked inside the gallery.
    pub keyboard_enabled: String,
}

impl Default for StatusOptions {
    fn default() -> Self {
        Self {
            entered: "미술관에 입장했습니다. WASD로 이동하세요!".into(),
            moving: "이동 중...".into(),
            keyboard_enabled: "키보드 활성화됨".into(),
        }
    }
}

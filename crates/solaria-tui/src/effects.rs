//! Effects produced by the reducer and executed by the runtime.

use tokio_util::sync::CancellationToken;

use crate::common::TaskId;
use crate::overlays::shell::ScriptStep;

#[derive(Debug)]
pub enum UiEffect {
    Quit,

    /// Starts the boot-sequence player on its own timers.
    StartBoot { task: Option<TaskId> },

    /// Cancels an active task via its token.
    CancelTask { token: Option<CancellationToken> },
    /// Cancels a free-standing token (shell session scripts).
    CancelToken { token: CancellationToken },

    FetchHeadline { task: Option<TaskId> },
    FetchFeed { task: Option<TaskId> },
    /// Fetches the generated shell greeting.
    FetchGreeting { task: Option<TaskId> },

    SubmitContact {
        task: Option<TaskId>,
        email: String,
    },
    /// Arms the 3s auto-clear for a contact error of generation `seq`.
    ScheduleContactReset { seq: u64 },

    /// Plays a scripted command's delayed lines under the shell session
    /// token.
    PlayShellScript {
        steps: Vec<ScriptStep>,
        cancel: CancellationToken,
    },

    CopyToClipboard { text: String },
}

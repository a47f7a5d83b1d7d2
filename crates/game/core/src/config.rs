/// Agent tunables shared by the exploration and flee phases.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// Whether the flee phase detours through gold at all.
    /// When false the agent walks the shortest path to the exit.
    pub collect_rewards: bool,

    /// Extra steps kept on top of the direct exit distance while detouring.
    /// Zero means detours may spend every step that is not needed to get out.
    pub reserve: u64,
}

impl AgentConfig {
    pub const DEFAULT_COLLECT_REWARDS: bool = true;
    pub const DEFAULT_RESERVE: u64 = 0;

    pub fn new() -> Self {
        Self {
            collect_rewards: Self::DEFAULT_COLLECT_REWARDS,
            reserve: Self::DEFAULT_RESERVE,
        }
    }

    pub fn with_reserve(mut self, reserve: u64) -> Self {
        self.reserve = reserve;
        self
    }

    /// Configuration that skips every detour and heads straight out.
    pub fn direct() -> Self {
        Self {
            collect_rewards: false,
            ..Self::new()
        }
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new()
    }
}

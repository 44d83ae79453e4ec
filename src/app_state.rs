use shadowlog_core::{
    ActorInfo, AnalysisContext, AnalysisSignal, AppConfig, BuffCatalog, BuffRecord, ConfigError,
    InferenceWindow, Settings,
};

/// Mutable REPL state: the settings and gear in use, and the inference window
/// fed by successive `infer` commands.
#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
    pub settings: Settings,
    pub actor: Option<ActorInfo>,
    pub window: InferenceWindow<'static>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(AppConfig::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        let config: AppConfig = confy::load("shadowlog", None).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to load config, using defaults");
            AppConfig::default()
        });
        Self::with_config(config)
    }

    fn with_config(config: AppConfig) -> Self {
        let settings = config.active_settings().clone();
        Self {
            config,
            settings,
            actor: None,
            window: InferenceWindow::new(BuffCatalog::global()),
        }
    }

    /// Replace the settings in use after validating them.
    pub fn set_settings(&mut self, settings: Settings) -> Result<(), ConfigError> {
        shadowlog_core::validate_settings(&settings)?;
        self.settings = settings;
        Ok(())
    }

    /// Switch to the stored settings for `player`.
    pub fn select_player(&mut self, player: &str) -> Result<(), ConfigError> {
        let settings = self.config.settings_for(player).clone();
        self.set_settings(settings)?;
        self.config.active_player = Some(player.to_string());
        Ok(())
    }

    /// Gear bonuses used by later spell resolution. `None` clears them.
    pub fn set_actor(&mut self, actor: Option<ActorInfo>) {
        self.actor = actor;
    }

    /// Context for resolving spells with the current settings and gear.
    pub fn context(&self) -> Result<AnalysisContext, ConfigError> {
        let ctx = AnalysisContext::new(self.settings.clone())?;
        Ok(match &self.actor {
            Some(actor) => ctx.with_actor(actor.clone()),
            None => ctx,
        })
    }

    /// Haste fraction implied by the configured haste rating.
    pub fn rating_haste(&self) -> Option<f64> {
        self.settings.haste_rating.map(shadowlog_core::haste_from_rating)
    }

    /// Feed the next signal to the inference window.
    pub fn observe(&mut self, signal: &AnalysisSignal) -> Vec<BuffRecord> {
        self.window.observe(signal)
    }

    /// Configured auras followed by inferred buffs the settings do not
    /// already list.
    pub fn buffs_in_effect(&self, inferred: &[BuffRecord]) -> Vec<BuffRecord> {
        let mut buffs = BuffCatalog::global().configured(&self.settings);
        for record in inferred {
            if !self.settings.have_aura(record.id) {
                buffs.push(record.clone());
            }
        }
        buffs
    }
}

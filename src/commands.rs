use std::path::Path;
use std::sync::Arc;

use shadowlog_core::{
    AnalysisSignal, BuffCatalog, BuffEvent, BuffRecord, SpellCatalog, SpellRecord, aura_name,
    canonicalize, spell_name, total_haste,
};
use tokio::sync::RwLock;

use crate::app_state::AppState;

fn print_spell(record: &SpellRecord) {
    let name = spell_name(record.main_id).unwrap_or("Unknown");
    println!("{} ({})", name, record.main_id);
    println!("  {:<22} {:?}", "damage type", record.damage_type);
    println!("  {:<22} {}", "max rank", record.max_rank);
    if !record.rank_ids.is_empty() {
        let ranks: Vec<String> = record
            .rank_ids
            .iter()
            .map(|(id, rank)| format!("{id}=r{rank}"))
            .collect();
        println!("  {:<22} {}", "lower ranks", ranks.join(", "));
    }
    if !record.damage_ids.is_empty() {
        println!("  {:<22} {:?}", "damage ids", record.damage_ids);
    }
    println!("  {:<22} {:.2}s", "cast time", record.base_cast_time);
    println!("  {:<22} {:.2}s", "cooldown", record.cooldown);
    println!("  {:<22} {:.2}s", "max duration", record.max_duration);
    println!(
        "  {:<22} {} x {:.2}s",
        "ticks", record.max_ticks, record.base_tick_time
    );
    println!("  {:<22} {}", "max damage instances", record.max_damage_instances);
    println!(
        "  {:<22} crit={} gcd={} dot_haste={} stats_by_tick={} multi_target={}",
        "flags",
        record.can_crit,
        record.gcd,
        record.dot_haste,
        record.stats_by_tick,
        record.multi_target
    );
}

fn print_buff(record: &BuffRecord) {
    println!("{} ({})", record.name, record.id);
    println!("  {:<22} {:?}", "trigger", record.trigger);
    println!("  {:<22} {:.1}%", "haste", record.haste * 100.0);
    println!("  {:<22} {}", "haste rating", record.haste_rating);
    println!("  {:<22} {}/{}", "stack", record.stack, record.max_stack);
    println!("  {:<22} {}", "debuff", record.debuff);
    if !record.does_not_stack_with.is_empty() {
        let names: Vec<String> = record
            .does_not_stack_with
            .iter()
            .map(|id| aura_name(*id).map_or_else(|| id.to_string(), str::to_string))
            .collect();
        println!("  {:<22} {}", "does not stack with", names.join(", "));
    }
}

pub async fn spell(raw_id: i64, haste: Option<f64>, state: Arc<RwLock<AppState>>) -> Result<(), String> {
    let s = state.read().await;
    let ctx = s.context().map_err(|e| e.to_string())?;
    let haste = haste.or_else(|| s.rating_haste());

    let record = SpellCatalog::global()
        .resolve_raw(raw_id, &ctx, haste)
        .map_err(|e| e.to_string())?;
    print_spell(&record);
    Ok(())
}

pub fn rank(raw_id: i64) -> Result<(), String> {
    let id = canonicalize(raw_id);
    let catalog = SpellCatalog::global();
    let record = catalog.baseline(id).map_err(|e| e.to_string())?;
    let rank = record.rank_of(id).map_err(|e| e.to_string())?;
    println!(
        "{} is rank {} of {} ({})",
        id,
        rank,
        spell_name(record.main_id).unwrap_or("Unknown"),
        record.main_id
    );
    Ok(())
}

pub fn damage(raw_id: i64) -> Result<(), String> {
    let id = canonicalize(raw_id);
    let record = SpellCatalog::global()
        .find_by_damage_id(id)
        .map_err(|e| e.to_string())?;
    println!(
        "damage id {} belongs to {} ({})",
        id,
        spell_name(record.main_id).unwrap_or("Unknown"),
        record.main_id
    );
    Ok(())
}

pub fn list_spells() {
    println!("{:<10} {:<24} {:<8} {}", "Id", "Spell", "Type", "Ranks");
    println!("{}", "-".repeat(60));
    for record in SpellCatalog::global().records() {
        println!(
            "{:<10} {:<24} {:<8} {}",
            record.main_id,
            spell_name(record.main_id).unwrap_or("Unknown"),
            format!("{:?}", record.damage_type),
            record.rank_ids.len() + 1
        );
    }
}

pub async fn buff(
    raw_id: i64,
    stack: Option<u32>,
    name: Option<String>,
    state: Arc<RwLock<AppState>>,
) -> Result<(), String> {
    let s = state.read().await;
    let event = BuffEvent {
        ability_id: canonicalize(raw_id),
        name: name.unwrap_or_default(),
        stack,
    };
    let record = BuffCatalog::global()
        .resolve(&event, &s.settings)
        .map_err(|e| e.to_string())?;
    print_buff(&record);
    println!("  {:<22} {}", "configured", s.settings.have_aura(record.id));
    Ok(())
}

pub async fn infer(signal: AnalysisSignal, reset: bool, state: Arc<RwLock<AppState>>) {
    let mut s = state.write().await;
    if reset {
        s.window.reset();
    }
    let inferred = s.observe(&signal);
    if inferred.is_empty() {
        println!("No buffs inferred");
    }
    for record in &inferred {
        println!("{:<10} {:<24} {:.1}%", record.id, record.name, record.haste * 100.0);
    }

    let buffs = s.buffs_in_effect(&inferred);
    let total = total_haste(s.settings.haste_rating, &buffs);
    println!(
        "total haste with {} buffs in effect: {:.2}%",
        buffs.len(),
        total * 100.0
    );
}

pub async fn load_gear(path: &str, state: Arc<RwLock<AppState>>) -> Result<(), String> {
    let actor = shadowlog_core::load_gear(Path::new(path)).map_err(|e| e.to_string())?;
    let count = actor.bonuses.len();
    state.write().await.set_actor(Some(actor));
    println!("loaded {count} gear bonuses from {path}");
    Ok(())
}

pub async fn clear_gear(state: Arc<RwLock<AppState>>) {
    state.write().await.set_actor(None);
    println!("gear bonuses cleared");
}

pub async fn show_settings(state: Arc<RwLock<AppState>>) {
    let s = state.read().await;
    let settings = &s.settings;
    println!(
        "player: {}",
        s.config.active_player.as_deref().unwrap_or("(default)")
    );
    match settings.haste_rating {
        Some(rating) => println!("haste rating: {rating}"),
        None => println!("haste rating: unknown"),
    }
    println!("improved mind blast: {}", settings.improved_mind_blast);
    println!("improved moonkin aura: {}", settings.improved_moonkin_aura);
    println!("improved retribution aura: {}", settings.improved_retribution_aura);
    let auras: Vec<String> = settings
        .auras
        .iter()
        .map(|id| aura_name(*id).map_or_else(|| id.to_string(), str::to_string))
        .collect();
    println!("auras: [{}]", auras.join(", "));
}

pub async fn load_settings(path: &str, state: Arc<RwLock<AppState>>) -> Result<(), String> {
    let settings = shadowlog_core::load_settings(Path::new(path)).map_err(|e| e.to_string())?;
    state
        .write()
        .await
        .set_settings(settings)
        .map_err(|e| e.to_string())?;
    println!("loaded settings from {path}");
    Ok(())
}

pub async fn select_player(name: &str, state: Arc<RwLock<AppState>>) -> Result<(), String> {
    state
        .write()
        .await
        .select_player(name)
        .map_err(|e| e.to_string())?;
    println!("using settings for {name}");
    Ok(())
}

pub fn exit() {
    println!("quitting...");
}

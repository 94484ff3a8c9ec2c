//! Polls the battle-type byte, owns the current [`Scene`], and
//! publishes a fresh snapshot to the battle-info topic whenever the
//! in-game turn counter advances.

use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use serde_json::json;

use harness_core::battle::BattleFlagLayout;
use harness_core::emulator::Emulator;
use harness_core::menu::MenuLayout;
use harness_core::pokemon::{ActivePokemon, EnemyPokemon, PartyLayout};
use harness_core::snapshot::SceneSnapshot;
use harness_core::text::CharTable;
use harness_core::variant::RomVariant;
use harness_scene::{NormalBattle, Scene};

fn unix_timestamp() -> f64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs_f64()).unwrap_or(0.0)
}

use crate::bus::{BusClient, Topics};
use crate::button_queue::ButtonQueue;
use crate::snapshot_builder::build_battle_scene;

pub struct SceneManagerService {
    battle_flag: BattleFlagLayout,
    menu: MenuLayout,
    party: PartyLayout,
    active: ActivePokemon,
    enemy: EnemyPokemon,
    table: CharTable,
    poll_interval: Duration,
    next_poll_at: Mutex<Instant>,
    scene: Mutex<Option<Scene>>,
    last_published_turn: Mutex<i16>,
}

impl SceneManagerService {
    pub fn new(variant: RomVariant, poll_interval: Duration) -> Self {
        Self {
            battle_flag: BattleFlagLayout::bind(variant),
            menu: MenuLayout::bind(variant),
            party: PartyLayout::bind(variant),
            active: ActivePokemon::bind(variant),
            enemy: EnemyPokemon::bind(variant),
            table: CharTable::gen1(),
            poll_interval,
            next_poll_at: Mutex::new(Instant::now() + poll_interval),
            scene: Mutex::new(None),
            last_published_turn: Mutex::new(-1),
        }
    }

    pub fn current_scene(&self) -> &Mutex<Option<Scene>> {
        &self.scene
    }

    pub fn start(&self, bus: &BusClient, topics: &Topics) {
        log::debug!("scene manager service starting");
        let payload = json!({ "msg": "hello from PKM", "timestamp": unix_timestamp() }).to_string();
        bus.publish(&topics.start(), payload, rumqttc::QoS::AtLeastOnce, false);
        *self.next_poll_at.lock().unwrap() = Instant::now() + self.poll_interval;
    }

    pub fn tick(
        &self,
        emu: &mut dyn Emulator,
        bus: &BusClient,
        topics: &Topics,
        queue: &ButtonQueue,
        now: Instant,
    ) {
        let mut next_poll_at = self.next_poll_at.lock().unwrap();
        if now < *next_poll_at {
            return;
        }
        *next_poll_at = now + self.poll_interval;
        drop(next_poll_at);

        let battle_id = self.battle_flag.read(emu);
        if battle_id > 0 {
            self.ensure_battle_scene(battle_id);
            self.drive_scene(emu, queue, now);
            self.publish_if_needed(battle_id, emu, bus, topics);
        } else {
            self.end_battle_if_needed();
        }
    }

    /// Read the live menu overlay and let the scene decide what, if
    /// anything, to press next. This is the only path that feeds the
    /// button queue on behalf of a commanded battle action.
    fn drive_scene(&self, emu: &mut dyn Emulator, queue: &ButtonQueue, now: Instant) {
        let menu_state = self.menu.read(emu);
        let mut scene = self.scene.lock().unwrap();
        if let Some(scene) = scene.as_mut() {
            if let Some(button) = scene.update(&menu_state, queue.is_empty(), now) {
                queue.append(button);
            }
        }
    }

    fn ensure_battle_scene(&self, battle_id: u8) {
        let mut scene = self.scene.lock().unwrap();
        let needs_new = !matches!(scene.as_ref(), Some(Scene::Normal(b)) if b.battle_id() == battle_id);
        if needs_new {
            log::info!("battle started (id={battle_id})");
            *scene = Some(Scene::Normal(NormalBattle::new(battle_id)));
            *self.last_published_turn.lock().unwrap() = -1;
        }
    }

    fn publish_if_needed(
        &self,
        battle_id: u8,
        emu: &mut dyn Emulator,
        bus: &BusClient,
        topics: &Topics,
    ) {
        let turn = self.battle_flag.turn_counter(emu) as i16;
        let mut last_turn = self.last_published_turn.lock().unwrap();
        if turn == *last_turn {
            return;
        }
        *last_turn = turn;
        drop(last_turn);

        let scene = match build_battle_scene(&self.party, &self.active, &self.enemy, emu, &self.table) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("failed to assemble battle snapshot: {e}");
                return;
            }
        };

        let snapshot =
            SceneSnapshot { battle_id, turn: turn as u8, timestamp: unix_timestamp(), scene };
        let payload = match serde_json::to_string(&snapshot) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("failed to serialise battle snapshot: {e}");
                return;
            }
        };
        bus.publish(&topics.battle_info(), payload, rumqttc::QoS::AtLeastOnce, true);
        log::info!("published battle update (battle_id={battle_id}, turn={turn})");
    }

    fn end_battle_if_needed(&self) {
        let mut scene = self.scene.lock().unwrap();
        if let Some(Scene::Normal(b)) = scene.as_ref() {
            log::info!("battle ended (id={})", b.battle_id());
        }
        *scene = None;
        *self.last_published_turn.lock().unwrap() = -1;
    }
}

//! Single-threaded play session.
//!
//! A [`Session`] owns the [`GameState`] and is the only thing that calls
//! into the engine. Move requests either resolve immediately
//! ([`Session::resolve_move`]) or go through the FIFO [`MoveBuffer`]
//! ([`Session::queue_move`] then [`Session::drain_one`]). Every committed
//! action refreshes the cached [`Reachability`] and is announced on the
//! [`EventBus`].

use tower_content::ContentFactory;
use tower_core::{
    Action, Direction, GameConfig, GameEngine, GameEnv, GameState, GameTables, PlayerState,
    Reachability, Room, Tower,
};

use crate::buffer::MoveBuffer;
use crate::error::{Result, RuntimeError};
use crate::events::{ActionEvent, Event, EventBus, RoomEvent, SubscriptionId, Topic};

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub game_config: GameConfig,
    /// Maximum number of queued moves; `None` leaves the buffer unbounded.
    pub move_buffer_capacity: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            move_buffer_capacity: Some(Self::DEFAULT_MOVE_BUFFER_CAPACITY),
        }
    }
}

impl SessionConfig {
    pub const DEFAULT_MOVE_BUFFER_CAPACITY: usize = 16;
}

/// Outcome of draining one queued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Nothing was queued.
    Idle,
    /// The request was committed.
    Committed(Action),
    /// The request was blocked and `discarded` queued moves were dropped.
    Rejected { discarded: usize },
}

pub struct Session {
    state: GameState,
    config: SessionConfig,
    tables: &'static GameTables,
    buffer: MoveBuffer,
    bus: EventBus,
    reachability: Reachability,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Resolves one move right away, bypassing the buffer.
    ///
    /// `Ok(None)` is an ordinary rejection; the state is unchanged.
    pub fn resolve_move(&mut self, direction: Direction) -> Result<Option<Action>> {
        let env = GameEnv::new(self.tables, &self.config.game_config);
        let resolved = GameEngine::new(&mut self.state).resolve_move(env, direction);

        match resolved {
            Ok(Some(action)) => {
                self.on_committed(action);
                Ok(Some(action))
            }
            Ok(None) => {
                let discarded = self.buffer.clear();
                self.on_rejected(direction, discarded);
                Ok(None)
            }
            Err(error) => {
                let discarded = self.buffer.clear();
                tracing::warn!(%error, %direction, discarded, "move resolution failed");
                Err(error.into())
            }
        }
    }

    /// Queues a move. Returns false when the buffer is full.
    pub fn queue_move(&mut self, direction: Direction) -> bool {
        let accepted = self.buffer.push(direction);
        if !accepted {
            tracing::debug!(%direction, "move buffer full, dropping request");
        }
        accepted
    }

    /// Resolves the oldest queued move. A rejection clears the buffer.
    pub fn drain_one(&mut self) -> Result<Step> {
        let Some(direction) = self.buffer.pop() else {
            return Ok(Step::Idle);
        };
        let pending = self.buffer.len();
        Ok(match self.resolve_move(direction)? {
            Some(action) => Step::Committed(action),
            None => Step::Rejected { discarded: pending },
        })
    }

    /// Resolves queued moves until the buffer is empty or a move is
    /// rejected. Returns the committed actions in order.
    pub fn drain(&mut self) -> Result<Vec<Action>> {
        let mut committed = Vec::new();
        loop {
            match self.drain_one()? {
                Step::Committed(action) => committed.push(action),
                Step::Idle | Step::Rejected { .. } => return Ok(committed),
            }
        }
    }

    /// Plans a move without committing it.
    pub fn preview(&self, direction: Direction) -> Result<Option<Action>> {
        let env = GameEnv::new(self.tables, &self.config.game_config);
        Ok(GameEngine::plan(&self.state, env, direction)?)
    }

    pub fn pending_moves(&self) -> usize {
        self.buffer.len()
    }

    /// Enterable cells of the current room as of the last committed action.
    pub fn current_reachability(&self) -> &Reachability {
        &self.reachability
    }

    pub fn subscribe(
        &mut self,
        topic: Topic,
        listener: impl FnMut(&Event) + 'static,
    ) -> SubscriptionId {
        self.bus.subscribe(topic, listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tower(&self) -> &Tower {
        &self.state.tower
    }

    pub fn player(&self) -> &PlayerState {
        &self.state.player
    }

    pub fn current_room(&self) -> Option<&Room> {
        self.state.current_room()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Serializes the game state as JSON.
    pub fn snapshot(&self) -> Result<String> {
        serde_json::to_string(&self.state).map_err(RuntimeError::Snapshot)
    }

    /// Replaces the game state with a snapshot. Pending moves are dropped.
    pub fn restore(&mut self, snapshot: &str) -> Result<()> {
        let state: GameState = serde_json::from_str(snapshot).map_err(RuntimeError::Snapshot)?;
        let from = self.state.player.location.room;
        self.state = state;
        self.buffer.clear();
        self.reachability = Reachability::compute(&self.state);

        let to = self.state.player.location.room;
        tracing::info!(room = to, "restored session snapshot");
        if from != to {
            self.bus.publish(RoomEvent::RoomChanged { from, to });
        }
        Ok(())
    }

    fn on_committed(&mut self, action: Action) {
        tracing::debug!(
            kind = %action.kind(),
            from = %action.player(),
            to = %action.target(),
            "action resolved"
        );
        self.reachability = Reachability::compute(&self.state);
        self.bus.publish(ActionEvent::ActionResolved { action });

        if action.changes_room() {
            let (from, to) = (action.player().room, action.target().room);
            tracing::info!(from, to, "entered room");
            self.bus.publish(RoomEvent::RoomChanged { from, to });
        }
    }

    fn on_rejected(&mut self, direction: Direction, discarded: usize) {
        let location = self.state.player.location;
        tracing::debug!(%direction, %location, discarded, "move rejected");
        self.bus.publish(ActionEvent::MoveRejected {
            direction,
            location,
            discarded,
        });
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("location", &self.state.player.location)
            .field("pending_moves", &self.buffer.len())
            .field("bus", &self.bus)
            .finish()
    }
}

/// Builder for [`Session`].
#[derive(Default)]
pub struct SessionBuilder {
    config: SessionConfig,
    tower: Option<Tower>,
    state: Option<GameState>,
    tables: Option<&'static GameTables>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn game_config(mut self, game_config: GameConfig) -> Self {
        self.config.game_config = game_config;
        self
    }

    /// Starts play on `tower`; its starting position is consumed at build time.
    pub fn tower(mut self, tower: Tower) -> Self {
        self.tower = Some(tower);
        self
    }

    /// Resumes from an existing state. Takes precedence over [`Self::tower`].
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn tables(mut self, tables: &'static GameTables) -> Self {
        self.tables = Some(tables);
        self
    }

    /// Loads `config.toml` and the strict import of `towers/{tower_name}.json`
    /// from a content directory.
    pub fn load(mut self, factory: &ContentFactory, tower_name: &str) -> Result<Self> {
        self.config.game_config = factory.load_config().map_err(RuntimeError::Content)?;
        self.tower = Some(
            factory
                .load_tower_strict(tower_name)
                .map_err(RuntimeError::Content)?,
        );
        Ok(self)
    }

    pub fn build(self) -> Result<Session> {
        let state = match (self.state, self.tower) {
            (Some(state), _) => state,
            (None, Some(tower)) => GameState::from_tower(tower).map_err(RuntimeError::InitialState)?,
            (None, None) => return Err(RuntimeError::MissingTower),
        };

        let buffer = match self.config.move_buffer_capacity {
            Some(capacity) => MoveBuffer::with_capacity(capacity),
            None => MoveBuffer::new(),
        };
        let reachability = Reachability::compute(&state);
        tracing::info!(
            tower = %state.tower.name,
            location = %state.player.location,
            "session started"
        );

        Ok(Session {
            state,
            config: self.config,
            tables: self.tables.unwrap_or_else(GameTables::shared),
            buffer,
            bus: EventBus::new(),
            reachability,
        })
    }
}

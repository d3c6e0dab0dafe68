//! Owned Channel and Port Tables
//!
//! ## Overview
//!
//! The driver owns exactly two pieces of configuration state: which
//! measurement channels exist ([`ChannelSet`]) and which physical ports are
//! wired to which roles ([`PortMap`]). Both are fixed-capacity index maps
//! built once at startup and passed by reference into the polling loop -
//! there is no ambient global registry anywhere in the crate.
//!
//! A port left unassigned simply means the corresponding sensor or actuator
//! does not exist on this station; the polling loop skips it. That is how a
//! station without a buzzer, or without a button, is expressed.

use heapless::FnvIndexMap;

use crate::{
    channel::Channel,
    constants::sampling::{MAX_CHANNELS, MAX_PORTS},
    errors::{ConfigError, ConfigResult},
    kinds::{ChannelKind, PortKind, PortNumber},
};

/// The set of measurement channels owned by one station
#[derive(Debug, Clone, Default)]
pub struct ChannelSet {
    channels: FnvIndexMap<ChannelKind, Channel, MAX_CHANNELS>,
}

impl ChannelSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self {
            channels: FnvIndexMap::new(),
        }
    }

    /// Creates the stock five-channel station
    ///
    /// Sound, light, temperature, humidity and button, each with its
    /// default window and precision.
    pub fn with_defaults() -> ConfigResult<Self> {
        let mut set = Self::new();
        for kind in ChannelKind::ALL {
            let channel = Channel::new(kind.default_config())?;
            set.insert(kind, channel)?;
        }
        Ok(set)
    }

    /// Adds or replaces the channel for `kind`
    pub fn insert(&mut self, kind: ChannelKind, channel: Channel) -> ConfigResult<()> {
        self.channels
            .insert(kind, channel)
            .map(|_| ())
            .map_err(|_| ConfigError::TooManyChannels {
                capacity: MAX_CHANNELS,
            })
    }

    /// The channel for `kind`, if registered
    pub fn get(&self, kind: ChannelKind) -> Option<&Channel> {
        self.channels.get(&kind)
    }

    /// Mutable access to the channel for `kind`, if registered
    pub fn get_mut(&mut self, kind: ChannelKind) -> Option<&mut Channel> {
        self.channels.get_mut(&kind)
    }

    /// True if a channel is registered for `kind`
    pub fn contains(&self, kind: ChannelKind) -> bool {
        self.channels.contains_key(&kind)
    }

    /// Iterate over registered channels in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (ChannelKind, &Channel)> + '_ {
        self.channels.iter().map(|(k, c)| (*k, c))
    }

    /// Iterate mutably over registered channels in insertion order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ChannelKind, &mut Channel)> + '_ {
        self.channels.iter_mut().map(|(k, c)| (*k, c))
    }

    /// Number of registered channels
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// True if no channels are registered
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

/// Which physical port each role is wired to
#[derive(Debug, Clone, Default)]
pub struct PortMap {
    ports: FnvIndexMap<PortKind, PortNumber, MAX_PORTS>,
}

impl PortMap {
    /// Creates a map with nothing wired
    pub fn new() -> Self {
        Self {
            ports: FnvIndexMap::new(),
        }
    }

    /// Wires `kind` to a physical port number
    pub fn assign(&mut self, kind: PortKind, port: PortNumber) -> ConfigResult<()> {
        self.ports
            .insert(kind, port)
            .map(|_| ())
            .map_err(|_| ConfigError::TooManyPorts { capacity: MAX_PORTS })
    }

    /// The port number wired to `kind`, if any
    pub fn port(&self, kind: PortKind) -> Option<PortNumber> {
        self.ports.get(&kind).copied()
    }

    /// True if `kind` is wired
    pub fn is_assigned(&self, kind: PortKind) -> bool {
        self.ports.contains_key(&kind)
    }

    /// Iterate over assignments in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (PortKind, PortNumber)> + '_ {
        self.ports.iter().map(|(k, p)| (*k, *p))
    }
}

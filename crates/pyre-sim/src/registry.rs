//! Structure registry: owns the hecs world holding one entity per structure.
//!
//! Structures are spawned once per city layout and keep their entity for
//! the life of that layout. Ids are dense: `StructureId(i)` is the i-th
//! spawned structure. Only the thermal system and the action validator
//! mutate thermal or fortification state, through `world_mut`.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use pyre_core::components::{Baseline, Fortification, Structure, Thermal};
use pyre_core::config::{CityLayout, GridLayout, ImportedCity};
use pyre_core::state::StructureView;
use pyre_core::types::{Position, StructureId};

#[derive(Default)]
pub struct StructureRegistry {
    world: World,
    entities: Vec<Entity>,
}

impl StructureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every structure with those described by `layout`.
    /// Returns the number of structures created.
    pub fn create_city(&mut self, layout: &CityLayout, rng: &mut ChaCha8Rng) -> usize {
        self.world.clear();
        self.entities.clear();

        match layout {
            CityLayout::Grid(grid) => self.spawn_grid(grid, rng),
            CityLayout::Imported(city) => self.spawn_imported(city),
        }

        self.entities.len()
    }

    /// Restore every structure to its baseline state.
    pub fn reset_all(&mut self) {
        for (_entity, (thermal, fortification)) in self
            .world
            .query_mut::<(&mut Thermal, &mut Fortification)>()
        {
            *thermal = Thermal::default();
            *fortification = Fortification::default();
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Resolve an id to its entity.
    pub fn entity(&self, id: StructureId) -> Option<Entity> {
        self.entities.get(id.0 as usize).copied()
    }

    /// All ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = StructureId> + '_ {
        (0..self.entities.len() as u32).map(StructureId)
    }

    /// Entity and position of every structure, in id order.
    pub fn positions(&self) -> Vec<(Entity, Position)> {
        self.entities
            .iter()
            .filter_map(|&entity| {
                self.world
                    .get::<&Position>(entity)
                    .ok()
                    .map(|pos| (entity, *pos))
            })
            .collect()
    }

    /// Read-only view of one structure.
    pub fn view(&self, id: StructureId) -> Option<StructureView> {
        let entity = self.entity(id)?;
        let mut query = self
            .world
            .query_one::<(&Structure, &Position, &Baseline, &Thermal, &Fortification)>(entity)
            .ok()?;
        query
            .get()
            .map(|(structure, pos, baseline, thermal, fortification)| StructureView {
                id: structure.id,
                label: structure.label.clone(),
                position: *pos,
                height: baseline.height,
                heat: thermal.heat,
                ignited: thermal.ignited,
                ignited_by: thermal.ignited_by,
                fortified: fortification.fortified,
            })
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Mutable thermal and fortification state of one structure.
    pub(crate) fn state_mut(
        &mut self,
        id: StructureId,
    ) -> Option<(&mut Thermal, &mut Fortification)> {
        let entity = self.entity(id)?;
        self.world
            .query_one_mut::<(&mut Thermal, &mut Fortification)>(entity)
            .ok()
    }

    /// Lay out `rows x columns` structures centred on the origin.
    fn spawn_grid(&mut self, grid: &GridLayout, rng: &mut ChaCha8Rng) {
        let pitch = grid.pitch();
        let offset_x = f64::from(grid.rows) * pitch / 2.0;
        let offset_z = f64::from(grid.columns) * pitch / 2.0;

        for x in 0..grid.rows {
            for z in 0..grid.columns {
                let height = grid.cube_size * (1.0 + rng.gen::<f64>() * grid.height_jitter);
                let position = Position::new(
                    f64::from(x) * pitch - offset_x,
                    height / 2.0,
                    f64::from(z) * pitch - offset_z,
                );
                self.spawn_structure(format!("{x}-{z}"), position, height);
            }
        }
    }

    fn spawn_imported(&mut self, city: &ImportedCity) {
        for descriptor in &city.structures {
            let position = descriptor.position * city.scale + Position::new(0.0, city.offset_y, 0.0);
            self.spawn_structure(
                descriptor.label.clone(),
                position,
                descriptor.height * city.scale,
            );
        }
    }

    fn spawn_structure(&mut self, label: String, position: Position, height: f64) -> Entity {
        let id = StructureId(self.entities.len() as u32);
        let entity = self.world.spawn((
            Structure { id, label },
            position,
            Baseline { height },
            Thermal::default(),
            Fortification::default(),
        ));
        self.entities.push(entity);
        entity
    }
}

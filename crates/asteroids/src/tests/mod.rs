//! Whole-game scenarios run through the world and the engine loop

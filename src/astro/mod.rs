//! A module for computing simple Keplerian orbits.
//!
//! The important struct here is [orbit::Orbit], a plain value describing an
//! elliptical orbit around a movable center, together with the solver that
//! turns an elapsed time into a position on that ellipse.

pub mod orbit;

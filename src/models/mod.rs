pub mod city;
pub mod filters;
pub mod trip;

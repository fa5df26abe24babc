//! The `Cube` value object and the module's link to the digest library.

pub mod cube;
pub mod digest;

pub use cube::{BASE_TAG, Cube, ExtendedCube};
pub use digest::{TaggedDigest, tagged_digest};

use probe::{RegisterError, RegistryBuilder};

/// Register this module's types.
///
/// Resolving `cube.Cube` for the first time warms the cached base digest.
/// `cube.digest.Engine` is registered but hidden, so it never probes true.
pub fn register(builder: &mut RegistryBuilder) -> Result<(), RegisterError> {
    builder
        .register_with_init("cube.Cube", Cube::default, digest::warm_base_digest)?
        .register("cube.ExtendedCube", ExtendedCube::default)?
        .register("cube.digest.TaggedDigest", || TaggedDigest::new(BASE_TAG))?
        .register_internal("cube.digest.Engine")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use probe::TypeRegistry;

    fn registry() -> TypeRegistry {
        let mut builder = TypeRegistry::builder();
        register(&mut builder).expect("register");
        builder.build()
    }

    #[test]
    fn registers_public_and_internal_names() {
        let registry = registry();
        let names: Vec<&str> = registry.names().map(|name| name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "cube.Cube",
                "cube.ExtendedCube",
                "cube.digest.Engine",
                "cube.digest.TaggedDigest"
            ]
        );
        assert!(registry.resolve("cube.Cube").is_ok());
        assert!(registry.resolve("cube.ExtendedCube").is_ok());
        assert!(registry.resolve("cube.digest.Engine").is_err());
    }

    #[test]
    fn constructs_default_cube() {
        let registry = registry();
        let value = registry
            .resolve("cube.Cube")
            .expect("resolve")
            .construct()
            .expect("factory");
        assert_eq!(value.downcast_ref::<Cube>(), Some(&Cube::new(0)));

        let value = registry
            .resolve("cube.ExtendedCube")
            .expect("resolve")
            .construct()
            .expect("factory");
        assert_eq!(value.downcast_ref::<ExtendedCube>(), Some(&ExtendedCube::new(0)));
    }

    #[test]
    fn registering_twice_is_rejected() {
        let mut builder = TypeRegistry::builder();
        register(&mut builder).expect("first");
        assert!(register(&mut builder).is_err());
    }
}

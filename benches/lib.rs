// benchmark-only crate, see the [[bench]] targets

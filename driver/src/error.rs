use kernel::KernelError;

/// Folds a driver-level error into an [`error_stack::Report`] carrying the
/// matching [`KernelError`] context. Each backend provides its own impl.
pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

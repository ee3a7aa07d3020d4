mod alert;

pub(crate) use alert::Alert;

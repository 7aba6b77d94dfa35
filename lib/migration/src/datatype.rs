use sea_orm_migration::prelude::*;

pub(crate) fn string_len_null<T: IntoIden>(ident: T, len: u32) -> ColumnDef {
    ColumnDef::new(ident).string_len(len).null().take()
}

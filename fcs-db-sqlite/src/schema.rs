///////////////////////////////////////////////////////////////////////
// Comments
///////////////////////////////////////////////////////////////////////

table! {
    film_comment (rowid) {
        rowid -> BigInt,
        id -> Text,
        film_id -> BigInt,
        nik -> Text,
        text -> Text,
        created_at -> BigInt,
    }
}

//! Localized (Indonesian) messages shown when the server sends none.

pub mod auth {
    pub const LOGIN_SUCCESS: &str = "Login berhasil";
    pub const LOGIN_FAILED: &str = "Login gagal";
    pub const REGISTER_SUCCESS: &str = "Registrasi berhasil";
    pub const REGISTER_FAILED: &str = "Registrasi gagal";
    pub const REFRESH_SUCCESS: &str = "Sesi berhasil diperbarui";
    pub const REFRESH_FAILED: &str = "Gagal memperbarui sesi";
    pub const NOT_LOGGED_IN: &str = "Silakan login terlebih dahulu";
    pub const INVALID_PAYLOAD: &str = "Data tidak valid";
}

pub mod transaction {
    pub const FETCH_FAILED: &str = "Gagal mengambil transaksi";
    pub const CREATE_FAILED: &str = "Gagal membuat transaksi";
    pub const UPDATE_FAILED: &str = "Gagal memperbarui transaksi";
    pub const DELETE_FAILED: &str = "Gagal menghapus transaksi";
    pub const DELETED: &str = "Transaksi berhasil dihapus";
    pub const INVALID_PAYLOAD: &str = "Data transaksi tidak valid";
    pub const SUMMARY_FAILED: &str = "Gagal mengambil summary";
    pub const SUMMARY_MISSING: &str = "Data summary tidak tersedia";
}

pub mod category {
    pub const FETCH_FAILED: &str = "Gagal mengambil kategori";
    pub const CREATE_FAILED: &str = "Gagal membuat kategori";
    pub const UPDATE_FAILED: &str = "Gagal memperbarui kategori";
    pub const DELETE_FAILED: &str = "Gagal menghapus kategori";
    pub const DELETED: &str = "Kategori berhasil dihapus";
    pub const INVALID_PAYLOAD: &str = "Data kategori tidak valid";
}

pub mod budget {
    pub const FETCH_FAILED: &str = "Gagal mengambil anggaran";
    pub const CREATE_FAILED: &str = "Gagal membuat anggaran";
    pub const UPDATE_FAILED: &str = "Gagal memperbarui anggaran";
    pub const DELETE_FAILED: &str = "Gagal menghapus anggaran";
    pub const CREATED: &str = "Anggaran berhasil dibuat";
    pub const DELETED: &str = "Anggaran berhasil dihapus";
    pub const INVALID_PAYLOAD: &str = "Data anggaran tidak valid";
}

pub mod saving {
    pub const FETCH_FAILED: &str = "Gagal mengambil tabungan";
    pub const CREATE_FAILED: &str = "Gagal membuat tabungan";
    pub const UPDATE_FAILED: &str = "Gagal memperbarui tabungan";
    pub const ADD_FAILED: &str = "Gagal menambah tabungan";
    pub const DELETE_FAILED: &str = "Gagal menghapus tabungan";
    pub const CREATED: &str = "Tabungan berhasil dibuat";
    pub const ADDED: &str = "Berhasil menambah tabungan";
    pub const DELETED: &str = "Tabungan berhasil dihapus";
    pub const INVALID_PAYLOAD: &str = "Data tabungan tidak valid";
}

pub mod reminder {
    pub const FETCH_FAILED: &str = "Gagal mengambil pengingat";
    pub const CREATE_FAILED: &str = "Gagal membuat pengingat";
    pub const UPDATE_FAILED: &str = "Gagal memperbarui pengingat";
    pub const MARK_PAID_FAILED: &str = "Gagal menandai sebagai lunas";
    pub const DELETE_FAILED: &str = "Gagal menghapus pengingat";
    pub const CREATED: &str = "Pengingat berhasil dibuat";
    pub const MARKED_PAID: &str = "Ditandai sebagai lunas";
    pub const DELETED: &str = "Pengingat berhasil dihapus";
    pub const INVALID_PAYLOAD: &str = "Data pengingat tidak valid";
}

pub mod article {
    pub const FETCH_FAILED: &str = "Gagal mengambil artikel";
    pub const INVALID_PAYLOAD: &str = "Data artikel tidak valid";
}

pub mod user {
    pub const FETCH_FAILED: &str = "Gagal mengambil profil";
    pub const UPDATE_FAILED: &str = "Gagal memperbarui profil";
    pub const UPDATED: &str = "Profil berhasil diperbarui";
    pub const INVALID_PAYLOAD: &str = "Data profil tidak valid";
    pub const USER_MISSING: &str = "Data user tidak tersedia";
    pub const PASSWORD_FAILED: &str = "Gagal mengubah password";
    pub const PASSWORD_CHANGED: &str = "Password berhasil diubah";
    pub const LOGOUT_SUCCESS: &str = "Logout berhasil";
    pub const DELETE_ACCOUNT_FAILED: &str = "Gagal menghapus akun";
    pub const ACCOUNT_DELETED: &str = "Akun berhasil dihapus";
}

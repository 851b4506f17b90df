/// General terms printed on the second page, in order.
pub const GENERAL_TERMS: [(&str, &str); 22] = [
    (
        "SOPIMUKSEN TARKOITUS",
        "Tällä sopimuksella vuokralleantaja antaa vuokralleottajalle vuokralle sopimuksen etusivulla määritellyn vuokrakohteen. Vuokrakohde on tarkoitettu käytettäväksi vuokralleottajan liiketoiminnassa.",
    ),
    (
        "SOPIMUKSEN VOIMASSAOLO",
        "Sopimus on voimassa toistaiseksi, kunnes jompikumpi osapuoli irtisanoo sen päättymään. Sopimus voidaan irtisanoa aikaisintaan sopimuksen kansilehdellä mainitun varsinaisen vuokra-ajan päätyttyä. Irtisanomisaika on kolme (3) kuukautta.",
    ),
    (
        "VUOKRAKOHTEEN TOIMITUS JA OMISTUSOIKEUS",
        "Vuokralleantaja tai vuokralleantajan osoittama myyjä toimittaa vuokrakohteen vuokralleottajalle sopimuksen etusivulla sovitun mukaisesti. Vuokrakohteen omistusoikeus säilyy vuokralleantajalla koko sopimuksen voimassaoloajan. Vuokralleottajalla ei ole oikeutta myydä, pantata tai muutoin luovuttaa vuokrakohdetta tai siihen liittyviä oikeuksia.",
    ),
    (
        "VUOKRAKOHTEEN TARKASTUS",
        "Vuokralleottajan on tarkastettava vuokrakohde viipymättä toimituksen jälkeen ja ilmoitettava välittömästi vuokralleantajalle ja myyjälle kirjallisesti mahdollisista virheistä. Vuokralleottaja menettää oikeutensa vedota virheeseen, ellei ilmoitusta ole tehty 14 päivän kuluessa toimituksesta.",
    ),
    (
        "VUOKRAKOHTEEN KÄYTTÖ JA HOITO",
        "Vuokralleottaja sitoutuu käyttämään vuokrakohdetta huolellisesti ja vain sen tavanomaiseen käyttötarkoitukseen. Vuokralleottaja vastaa vuokrakohteen asianmukaisesta huollosta, kunnossapidosta ja korjauksista omalla kustannuksellaan. Vuokrakohteeseen ei saa tehdä muutoksia ilman vuokralleantajan kirjallista suostumusta.",
    ),
    (
        "VUOKRA JA MAKSUEHDOT",
        "Vuokralleottaja sitoutuu maksamaan vuokralleantajalle sopimuksen etusivulla määritellyn vuokran sovituissa erissä. Vuokraan lisätään kulloinkin voimassa oleva arvonlisävero. Maksujen viivästyessä vuokralleottaja on velvollinen maksamaan viivästyskorkoa korkolain mukaisesti.",
    ),
    (
        "VUOKRAN JA PALKKIOIDEN MUUTOKSET",
        "Vuokralleantajalla on oikeus tarkistaa vuokraa ja palkkioita vuosittain yleisen kustannustason ja korkojen muutoksia vastaavasti. Muutoksista ilmoitetaan vuokralleottajalle kirjallisesti vähintään 30 päivää ennen muutoksen voimaantuloa.",
    ),
    (
        "VAKUUTUKSET",
        "Vuokralleottaja sitoutuu pitämään vuokrakohteen asianmukaisesti vakuutettuna koko vuokra-ajan. Vakuutuksen tulee kattaa vuokrakohteen täysi jälleenhankinta-arvo ja sisältää vähintään palo-, varkaus- ja vahingonkorvausvakuutuksen. Vakuutuskirjaan tulee merkitä vuokralleantaja edunsaajaksi.",
    ),
    (
        "VUOKRAKOHTEEN VAHINGOITTUMINEN TAI TUHOUTUMINEN",
        "Vuokralleottaja on velvollinen ilmoittamaan vuokralleantajalle välittömästi vuokrakohteelle sattuneesta vahingosta. Vahinko ei vapauta vuokralleottajaa vuokranmaksuvelvollisuudesta. Vakuutuskorvaus on käytettävä vuokrakohteen korjaamiseen tai se suoritetaan vuokralleantajalle.",
    ),
    (
        "VASTUU KOLMANSILLE",
        "Vuokralleottaja vastaa kaikista vuokrakohteen käytöstä kolmansille aiheutuneista vahingoista ja pitää vuokralleantajan vapaana kaikista tällaisista vaatimuksista.",
    ),
    (
        "SOPIMUSRIKKOMUS JA SOPIMUKSEN PURKAMINEN",
        "Vuokralleantajalla on oikeus purkaa sopimus välittömästi, mikäli: a) vuokralleottaja laiminlyö vuokran tai muiden maksujen suorittamisen; b) vuokralleottaja rikkoo olennaisesti sopimuksen muita ehtoja; c) vuokralleottaja asetetaan konkurssiin tai yrityssaneeraukseen; d) vuokralleottajan taloudellinen tilanne heikkenee olennaisesti.",
    ),
    (
        "SOPIMUKSEN ENNENAIKAINEN PÄÄTTYMINEN",
        "Sopimuksen ennenaikaisesti päättyessä vuokralleottaja on velvollinen maksamaan vuokralleantajalle kaikki jäljellä olevat vuokraerät, vakuutuskorvaukset ja mahdolliset muut saatavat. Vuokralleantajalla on oikeus vaatia vuokrakohteen välitöntä palauttamista.",
    ),
    (
        "LUNASTUSOIKEUS",
        "Sopimuksen päättyessä vuokralleottajalla on oikeus lunastaa vuokrakohde sopimuksen etusivulla mainitulla jäännösarvolla, mikäli vuokralleottaja on täyttänyt kaikki sopimuksen mukaiset velvoitteensa.",
    ),
    (
        "VUOKRAKOHTEEN PALAUTTAMINEN",
        "Mikäli vuokralleottaja ei lunasta vuokrakohdetta, on vuokrakohde palautettava vuokralleantajan osoittamaan paikkaan vuokralleottajan kustannuksella. Vuokrakohteen on oltava hyvässä ja toimintakuntoisessa tilassa normaali kuluminen huomioon ottaen.",
    ),
    (
        "VIRANOMAISVAATIMUKSET",
        "Vuokralleottaja vastaa siitä, että vuokrakohde täyttää kaikki viranomaisten asettamat vaatimukset koko vuokra-ajan ja vastaa kaikista tähän liittyvistä kustannuksista.",
    ),
    (
        "VUOKRALLEANTAJAN VASTUU",
        "Vuokralleantaja ei vastaa vuokrakohteen virheistä tai puutteista, toimituksen viivästymisestä eikä mistään välillisistä vahingoista. Vuokralleottajan tulee kohdistaa vaatimuksensa suoraan myyjälle.",
    ),
    (
        "TARKASTUSOIKEUS",
        "Vuokralleantajalla tai sen valtuuttamalla edustajalla on oikeus milloin tahansa kohtuullisella ilmoitusajalla tarkastaa vuokrakohde ja sen kunto.",
    ),
    (
        "YLIVOIMAINEN ESTE",
        "Vuokralleantaja ei vastaa vahingosta, joka johtuu lainsäädännöstä, viranomaisten toimista, sotatoimista, lakosta, työsulusta, saarrosta, pandemiasta, katkoksesta tietoliikenneyhteyksissä tai muusta ylivoimaisesta esteestä.",
    ),
    (
        "VUOKRALLEOTTAJAN TIEDONANTOVELVOLLISUUS",
        "Vuokralleottajan tulee ilmoittaa vuokralleantajalle yhteystiedoissaan tapahtuvista muutoksista. Vuokralleottajan tulee myös ilmoittaa muutoksista yhtiömuodossa, omistussuhteissa ja liiketoiminnassa. Vuokralleottajan on vuokralleantajan pyynnöstä toimitettava viimeisin tilinpäätöksensä.",
    ),
    (
        "SOPIMUKSEN SIIRTO",
        "Vuokralleantajalla on oikeus siirtää tämä sopimus kaikkine oikeuksineen kolmannelle osapuolelle. Vuokralleottajalla ei ole oikeutta siirtää tätä sopimusta ilman vuokralleantajan etukäteistä kirjallista suostumusta.",
    ),
    (
        "MUUTOKSET",
        "Osapuolten on sovittava kaikista muutoksista tähän sopimukseen kirjallisesti.",
    ),
    (
        "SOVELLETTAVA LAKI JA ERIMIELISYYKSIEN RATKAISU",
        "Tähän sopimukseen sovelletaan Suomen lakia. Tähän sopimukseen ei sovelleta irtaimen esineen vuokraa koskevia säännöksiä ja periaatteita. Mikäli erimielisyyksiä ei voida ratkaista osapuolten välisillä neuvotteluilla, asia ratkaistaan ensimmäisenä asteena vastaajan kotipaikan alioikeudessa tai Helsingin käräjäoikeudessa.",
    ),
];
